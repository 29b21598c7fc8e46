//! Reference data: industry categories and stylistic vibes.
//!
//! Both sets are fixed and ordered. Their indices are the feature codes the
//! style predictors consume, so the order must never change.

use serde::{Deserialize, Serialize};

/// Number of distinct variation slots. Requests are folded into `0..VARIATIONS`.
pub const VARIATIONS: u8 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

/// Industry a design kit is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Automotive,
    Beauty,
    Construction,
    Cybersecurity,
    Education,
    Entertainment,
    Fashion,
    Finance,
    Food,
    Gaming,
    Healthcare,
    Interior,
    Legal,
    Marketing,
    Music,
    #[serde(rename = "Non-Profit")]
    NonProfit,
    Photography,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Sports,
    Technology,
    Travel,
}

impl Category {
    pub const ALL: [Category; 21] = [
        Category::Automotive,
        Category::Beauty,
        Category::Construction,
        Category::Cybersecurity,
        Category::Education,
        Category::Entertainment,
        Category::Fashion,
        Category::Finance,
        Category::Food,
        Category::Gaming,
        Category::Healthcare,
        Category::Interior,
        Category::Legal,
        Category::Marketing,
        Category::Music,
        Category::NonProfit,
        Category::Photography,
        Category::RealEstate,
        Category::Sports,
        Category::Technology,
        Category::Travel,
    ];

    /// Display label, as shown in the form and used in generated copy.
    pub fn label(self) -> &'static str {
        match self {
            Category::Automotive => "Automotive",
            Category::Beauty => "Beauty",
            Category::Construction => "Construction",
            Category::Cybersecurity => "Cybersecurity",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Fashion => "Fashion",
            Category::Finance => "Finance",
            Category::Food => "Food",
            Category::Gaming => "Gaming",
            Category::Healthcare => "Healthcare",
            Category::Interior => "Interior",
            Category::Legal => "Legal",
            Category::Marketing => "Marketing",
            Category::Music => "Music",
            Category::NonProfit => "Non-Profit",
            Category::Photography => "Photography",
            Category::RealEstate => "Real Estate",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
            Category::Travel => "Travel",
        }
    }

    #[cfg(test)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact label lookup. Surrounding whitespace is ignored, case is not.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Lenient lookup used by request handling: unknown or missing labels
    /// fall back to the first category.
    pub fn resolve(label: Option<&str>) -> Category {
        label
            .and_then(Category::from_label)
            .unwrap_or(Category::ALL[0])
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vibe
// ────────────────────────────────────────────────────────────────────────────

/// Stylistic tone, ordered from energetic/promotional to corporate/professional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vibe {
    Commercial,
    Promotional,
    Balanced,
    Corporate,
    Professional,
}

impl Vibe {
    pub const ALL: [Vibe; 5] = [
        Vibe::Commercial,
        Vibe::Promotional,
        Vibe::Balanced,
        Vibe::Corporate,
        Vibe::Professional,
    ];

    /// Slider position to vibe. Out-of-range positions are clamped to [0, 4].
    pub fn from_index(index: i64) -> Vibe {
        Vibe::ALL[index.clamp(0, 4) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Vibe::Commercial => "Commercial",
            Vibe::Promotional => "Promotional",
            Vibe::Balanced => "Balanced",
            Vibe::Corporate => "Corporate",
            Vibe::Professional => "Professional",
        }
    }

    /// Corporate and Professional select the restrained style branch.
    pub fn is_corporate(self) -> bool {
        self.index() >= 3
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Folds any requested variation into `0..VARIATIONS`, negatives included.
pub fn normalize_variation(variation: i64) -> u8 {
    variation.rem_euclid(VARIATIONS as i64) as u8
}
