// Design kit API: prediction, UX suggestions, code preview, and zip export.
// Style comes from the predictor in AppState, images from the shared cache,
// and all LLM calls go through llm_client.

pub mod copy;
pub mod handlers;
pub mod prompts;
pub mod suggestions;
