// Style resolution: reference data, the threshold rule, and a table backend
// fitted from the synthetic training grid.

pub mod catalog;
pub mod resolver;
pub mod training;

use std::sync::Arc;

use tracing::{info, warn};

pub use catalog::{Category, Vibe};
pub use resolver::{Layout, RulePredictor, StylePredictor, StyleResult};
pub use training::{training_grid, TablePredictor};

/// Builds the predictor named by `STYLE_BACKEND`. Unknown names fall back to the rule.
pub fn build_predictor(backend: &str) -> Arc<dyn StylePredictor> {
    match backend.trim().to_ascii_lowercase().as_str() {
        "table" => {
            let grid = training_grid();
            let table = TablePredictor::fit(&grid);
            if table.is_empty() {
                warn!("Style table fitted no cells, using rule predictor");
                return Arc::new(RulePredictor);
            }
            info!(
                "Style table fitted: {} cells, {:.1}% grid accuracy",
                table.len(),
                table.accuracy(&grid) * 100.0
            );
            Arc::new(table)
        }
        "rule" | "" => Arc::new(RulePredictor),
        other => {
            warn!("Unknown STYLE_BACKEND '{other}', using rule predictor");
            Arc::new(RulePredictor)
        }
    }
}
