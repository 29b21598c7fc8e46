//! Kit rendering — style tuple + copy → index.html / style.css / script.js.
//!
//! Pure string work. The export endpoints accept a client-held design, so the
//! theme fields are free text rather than the resolver's enums. Values that
//! land in markup are HTML-escaped; values inside script string literals
//! (the tailwind config and script.js) are JS-escaped.

use serde::{Deserialize, Serialize};

use crate::kit::templates::{
    BENTO_GRID_HERO, CSS_TEMPLATE, HTML_TEMPLATE, JS_TEMPLATE, SPLIT_SCREEN_HERO,
};
use crate::style::{Layout, StyleResult};

/// Font used when the requested family is empty.
pub const DEFAULT_FONT: &str = "Inter";

/// Visual parameters of a kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitTheme {
    pub layout: String,
    pub font: String,
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl From<&StyleResult> for KitTheme {
    fn from(style: &StyleResult) -> Self {
        Self {
            layout: style.layout.label().to_string(),
            font: style.font.label().to_string(),
            primary: style.palette.primary.to_string(),
            secondary: style.palette.secondary.to_string(),
            tertiary: style.palette.tertiary.to_string(),
        }
    }
}

/// The three exported text files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitArtifact {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// Renders the three kit files. Deterministic for identical inputs.
pub fn render(
    category: &str,
    headline: &str,
    subtext: &str,
    theme: &KitTheme,
    image_url: &str,
) -> KitArtifact {
    let (font, font_url) = sanitize_font(&theme.font);

    let category_html = escape_html(category);
    let hero_template = if theme.layout.trim() == Layout::BentoGrid.label() {
        BENTO_GRID_HERO
    } else {
        SPLIT_SCREEN_HERO
    };
    let hero = fill(
        hero_template,
        &[
            ("category", category_html.as_str()),
            ("headline", escape_html(headline).as_str()),
            ("sub", escape_html(subtext).as_str()),
            ("img_url", escape_html(image_url).as_str()),
        ],
    );

    let html = fill(
        HTML_TEMPLATE,
        &[
            ("category", category_html.as_str()),
            ("font", escape_js(&font).as_str()),
            ("font_url", escape_html(&font_url).as_str()),
            ("primary", escape_js(&theme.primary).as_str()),
            ("secondary", escape_js(&theme.secondary).as_str()),
            ("tertiary", escape_js(&theme.tertiary).as_str()),
            ("hero", hero.as_str()),
        ],
    );

    let css = fill(
        CSS_TEMPLATE,
        &[
            ("secondary", theme.secondary.as_str()),
            ("tertiary", theme.tertiary.as_str()),
        ],
    );

    let js = fill(JS_TEMPLATE, &[("category", escape_js(category).as_str())]);

    KitArtifact { html, css, js }
}

/// Splits a font label into (family, URL family).
///
/// Anything from the first `(` on is dropped, e.g. `"Inter (Sans)"` → `("Inter", "Inter")`;
/// spaces become `+` in the URL form. Empty input yields `DEFAULT_FONT`.
pub fn sanitize_font(raw: &str) -> (String, String) {
    let family = raw.split('(').next().unwrap_or_default().trim();
    let family = if family.is_empty() { DEFAULT_FONT } else { family };
    (family.to_string(), family.replace(' ', "+"))
}

/// Single-pass `{key}` substitution. Unknown `{...}` sequences are left as-is.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_js(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out
}
