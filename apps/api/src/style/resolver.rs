//! Style resolution — (category, vibe, variation) → (layout, font, palette).
//!
//! The resolution rule is a single threshold on the vibe index. Callers go
//! through the `StylePredictor` trait so a fitted model can replace the rule
//! without touching handlers.

use serde::Serialize;

use crate::style::catalog::{Category, Vibe};

/// Page arrangement of the generated kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layout {
    #[serde(rename = "Bento Grid")]
    BentoGrid,
    #[serde(rename = "Split Screen")]
    SplitScreen,
}

impl Layout {
    pub fn label(self) -> &'static str {
        match self {
            Layout::BentoGrid => "Bento Grid",
            Layout::SplitScreen => "Split Screen",
        }
    }
}

/// Web font family used for all kit typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Font {
    Inter,
    Montserrat,
}

impl Font {
    pub fn label(self) -> &'static str {
        match self {
            Font::Inter => "Inter",
            Font::Montserrat => "Montserrat",
        }
    }
}

/// Hex colour triple driving the kit's theme variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
}

/// Slate/white/blue, used by the corporate branch.
pub const CORPORATE_PALETTE: Palette = Palette {
    primary: "#0f172a",
    secondary: "#f8fafc",
    tertiary: "#3b82f6",
};

/// Hot pink/near-black/amber, used by the promotional branch.
pub const PROMOTIONAL_PALETTE: Palette = Palette {
    primary: "#ff0055",
    secondary: "#1a1a1a",
    tertiary: "#ffcc00",
};

/// The resolved style tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleResult {
    pub layout: Layout,
    pub font: Font,
    #[serde(flatten)]
    pub palette: Palette,
}

impl StyleResult {
    pub const CORPORATE: StyleResult = StyleResult {
        layout: Layout::BentoGrid,
        font: Font::Inter,
        palette: CORPORATE_PALETTE,
    };

    pub const PROMOTIONAL: StyleResult = StyleResult {
        layout: Layout::SplitScreen,
        font: Font::Montserrat,
        palette: PROMOTIONAL_PALETTE,
    };
}

/// Resolves the style for a request.
///
/// Only the vibe branch matters: category and variation are accepted so the
/// signature matches the predictor features, but neither changes the result.
pub fn resolve(_category: Category, vibe: Vibe, _variation: i64) -> StyleResult {
    if vibe.is_corporate() {
        StyleResult::CORPORATE
    } else {
        StyleResult::PROMOTIONAL
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Predictor seam
// ────────────────────────────────────────────────────────────────────────────

/// Pluggable style predictor. Carried in `AppState` as `Arc<dyn StylePredictor>`.
pub trait StylePredictor: Send + Sync {
    fn predict(&self, category: Category, vibe: Vibe, variation: i64) -> StyleResult;

    /// Backend name, surfaced in logs.
    fn backend(&self) -> &'static str;
}

/// Default predictor: the threshold rule, evaluated directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct RulePredictor;

impl StylePredictor for RulePredictor {
    fn predict(&self, category: Category, vibe: Vibe, variation: i64) -> StyleResult {
        resolve(category, vibe, variation)
    }

    fn backend(&self) -> &'static str {
        "rule"
    }
}
