//! UX suggestions from the LLM for a resolved design.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::design::prompts::SUGGEST_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

/// Number of suggestions a well-formed response carries.
pub const SUGGESTION_COUNT: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuggestRequest {
    pub category: String,
    pub vibe: String,
    pub layout: String,
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
}

pub fn build_prompt(request: &SuggestRequest) -> String {
    SUGGEST_PROMPT_TEMPLATE
        .replace("{category}", request.category.trim())
        .replace("{vibe}", request.vibe.trim())
        .replace("{layout}", request.layout.trim())
        .replace("{primary}", request.primary.trim())
        .replace("{secondary}", request.secondary.trim())
}

/// Asks the LLM for three UX tips. Every failure collapses into `AppError::Llm`.
pub async fn generate_suggestions(
    llm: Option<&LlmClient>,
    request: &SuggestRequest,
) -> Result<Suggestions, AppError> {
    let llm = llm.ok_or_else(|| AppError::Llm("AI client not initialized".to_string()))?;

    let prompt = build_prompt(request);
    let response = llm
        .call_json::<Suggestions>(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Suggestion generation failed: {e}")))?;

    let suggestions = validate(response)?;
    info!("Generated UX suggestions for '{}'", request.category);
    Ok(suggestions)
}

/// Accepts exactly `SUGGESTION_COUNT` non-blank strings, trimmed.
fn validate(response: Suggestions) -> Result<Suggestions, AppError> {
    let suggestions: Vec<String> = response
        .suggestions
        .into_iter()
        .map(|s| s.trim().to_string())
        .collect();

    if suggestions.len() != SUGGESTION_COUNT || suggestions.iter().any(String::is_empty) {
        return Err(AppError::Llm(format!(
            "expected {SUGGESTION_COUNT} non-empty suggestions, got {suggestions:?}"
        )));
    }
    Ok(Suggestions { suggestions })
}
