//! Marketing copy derived from the category.

pub fn headline(category: &str) -> String {
    format!("Redefining {category}")
}

pub fn subheadline(category: &str) -> String {
    format!("Experience the future of the {category} industry with our AI-driven solutions.")
}
