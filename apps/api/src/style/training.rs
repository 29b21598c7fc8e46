//! Synthetic training grid and a table-backed predictor fitted from it.
//!
//! The grid enumerates every (category, vibe, variation) cell and labels it
//! with the threshold rule, so a predictor fitted here reproduces the rule on
//! the full input space. It exists to exercise the `StylePredictor` seam with
//! a backend that is actually trained.

use std::collections::HashMap;

use tracing::debug;

use crate::style::catalog::{normalize_variation, Category, Vibe, VARIATIONS};
use crate::style::resolver::{resolve, StylePredictor, StyleResult};

/// One labelled row: feature codes plus the expected style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingRow {
    pub category: Category,
    pub vibe: Vibe,
    pub variation: u8,
    pub label: StyleResult,
}

/// Builds the 5 vibes × 21 categories × 5 variations grid.
pub fn training_grid() -> Vec<TrainingRow> {
    let mut rows = Vec::with_capacity(Category::ALL.len() * Vibe::ALL.len() * VARIATIONS as usize);
    for category in Category::ALL {
        for vibe in Vibe::ALL {
            for variation in 0..VARIATIONS {
                rows.push(TrainingRow {
                    category,
                    vibe,
                    variation,
                    label: resolve(category, vibe, variation as i64),
                });
            }
        }
    }
    rows
}

/// Memorising predictor. Cells missing from the fitted table fall back to the rule.
#[derive(Debug, Default, Clone)]
pub struct TablePredictor {
    table: HashMap<(Category, Vibe, u8), StyleResult>,
}

impl TablePredictor {
    /// Fits the table from labelled rows. Later rows overwrite earlier ones for the same cell.
    pub fn fit(rows: &[TrainingRow]) -> Self {
        let table: HashMap<_, _> = rows
            .iter()
            .map(|row| ((row.category, row.vibe, row.variation), row.label))
            .collect();
        debug!("Fitted style table with {} cells", table.len());
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Fraction of rows whose label the predictor reproduces exactly.
    pub fn accuracy(&self, rows: &[TrainingRow]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        let hits = rows
            .iter()
            .filter(|row| self.predict(row.category, row.vibe, row.variation as i64) == row.label)
            .count();
        hits as f64 / rows.len() as f64
    }
}

impl StylePredictor for TablePredictor {
    fn predict(&self, category: Category, vibe: Vibe, variation: i64) -> StyleResult {
        let key = (category, vibe, normalize_variation(variation));
        self.table
            .get(&key)
            .copied()
            .unwrap_or_else(|| resolve(category, vibe, variation))
    }

    fn backend(&self) -> &'static str {
        "table"
    }
}
