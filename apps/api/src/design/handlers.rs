//! Axum route handlers for the design kit API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::log_generation;
use crate::design::copy::{headline, subheadline};
use crate::design::suggestions::{generate_suggestions, SuggestRequest, Suggestions};
use crate::errors::AppError;
use crate::images::FALLBACK_IMAGE_URL;
use crate::kit::{self, KitArtifact, KitTheme, ARCHIVE_NAME};
use crate::models::generation::GenerationRecord;
use crate::state::AppState;
use crate::style::{Category, StyleResult, Vibe};

/// Slider position used when the request omits `vibe_value`.
pub const DEFAULT_VIBE_INDEX: i64 = 2;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// An integer field as sent by the form: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IntInput {
    /// Floats truncate toward zero; strings must parse as integers.
    fn to_i64(&self, field: &str) -> Result<i64, AppError> {
        match self {
            IntInput::Int(n) => Ok(*n),
            IntInput::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
            IntInput::Float(_) => Err(AppError::Validation(format!("{field} must be a number"))),
            IntInput::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::Validation(format!("{field} must be an integer, got '{s}'"))),
        }
    }
}

fn int_or_default(input: Option<&IntInput>, field: &str, default: i64) -> Result<i64, AppError> {
    input.map_or(Ok(default), |v| v.to_i64(field))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    pub category: Option<String>,
    pub vibe_value: Option<IntInput>,
    pub variation: Option<IntInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignResponse {
    pub category: &'static str,
    #[serde(flatten)]
    pub style: StyleResult,
    pub headline: String,
    pub sub: String,
    pub vibe: &'static str,
    pub img_url: String,
}

/// A design as held by the browser, posted back for export.
/// Every field is optional; gaps are filled from the default category and palette.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DesignPayload {
    pub category: Option<String>,
    pub layout: Option<String>,
    pub font: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub headline: Option<String>,
    pub sub: Option<String>,
    pub img_url: Option<String>,
}

impl DesignPayload {
    pub fn render(&self) -> KitArtifact {
        let fallback = KitTheme::from(&StyleResult::PROMOTIONAL);
        let pick = |value: &Option<String>, default: String| -> String {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(default)
        };

        let category = pick(&self.category, Category::ALL[0].label().to_string());
        let theme = KitTheme {
            layout: pick(&self.layout, fallback.layout),
            font: pick(&self.font, fallback.font),
            primary: pick(&self.primary, fallback.primary),
            secondary: pick(&self.secondary, fallback.secondary),
            tertiary: pick(&self.tertiary, fallback.tertiary),
        };
        let title = pick(&self.headline, headline(&category));
        let sub = pick(&self.sub, subheadline(&category));
        let img_url = pick(&self.img_url, FALLBACK_IMAGE_URL.to_string());

        kit::render(&category, &title, &sub, &theme, &img_url)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /predict
///
/// Resolves the style for (category, vibe, variation), attaches copy and an image,
/// and records the generation. Unknown categories and out-of-range values are coerced.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<DesignResponse>, AppError> {
    let vibe_index = int_or_default(request.vibe_value.as_ref(), "vibe_value", DEFAULT_VIBE_INDEX)?;
    let variation = int_or_default(request.variation.as_ref(), "variation", 0)?;

    let category = Category::resolve(request.category.as_deref());
    let vibe = Vibe::from_index(vibe_index);
    let style = state.style_predictor.predict(category, vibe, variation);

    info!(
        "Predicted {} / {} for {category} ({vibe}) via {} backend",
        style.layout.label(),
        style.font.label(),
        state.style_predictor.backend()
    );

    let img_url = state.images.get_image(category.label()).await;

    let record = GenerationRecord {
        category: category.label(),
        vibe: vibe.label(),
        layout: style.layout.label(),
        font: style.font.label(),
        primary_color: style.palette.primary,
    };
    if let Err(e) = log_generation(&state.db, &record).await {
        warn!("Failed to record generation: {e}");
    }

    Ok(Json(DesignResponse {
        category: category.label(),
        style,
        headline: headline(category.label()),
        sub: subheadline(category.label()),
        vibe: vibe.label(),
        img_url,
    }))
}

/// POST /suggest
///
/// Three UX tips for the posted design. Any LLM failure is a generic 500.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<Suggestions>, AppError> {
    if request.category.trim().is_empty() {
        return Err(AppError::Validation("category cannot be empty".to_string()));
    }

    let suggestions = generate_suggestions(state.llm.as_ref(), &request).await?;
    Ok(Json(suggestions))
}

/// POST /view-code
///
/// Returns the rendered kit files for in-browser preview.
pub async fn handle_view_code(Json(design): Json<DesignPayload>) -> Json<KitArtifact> {
    Json(design.render())
}

/// POST /download
///
/// Returns the rendered kit as a zip attachment.
pub async fn handle_download(Json(design): Json<DesignPayload>) -> Result<Response, AppError> {
    let artifact = design.render();
    let archive = kit::package(&artifact)?;

    info!("Packaged design kit ({} bytes)", archive.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{ARCHIVE_NAME}\""),
            ),
        ],
        Bytes::from(archive),
    )
        .into_response())
}
