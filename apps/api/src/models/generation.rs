use serde::Serialize;
use sqlx::FromRow;

/// Values written to the generation log for one prediction.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRecord<'a> {
    pub category: &'a str,
    pub vibe: &'a str,
    pub layout: &'a str,
    pub font: &'a str,
    pub primary_color: &'a str,
}

/// A stored generation log row. The service only writes these; reads are for tooling and tests.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GenerationRow {
    pub id: i64,
    pub timestamp: Option<String>,
    pub category: Option<String>,
    pub vibe: Option<String>,
    pub layout: Option<String>,
    pub font: Option<String>,
    pub primary_color: Option<String>,
}
