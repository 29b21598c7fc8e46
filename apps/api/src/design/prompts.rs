// Prompt constants for UX suggestions.
// Reuses cross-cutting fragments from llm_client::prompts.

/// UX suggestion prompt. Replace `{category}`, `{vibe}`, `{layout}`, `{primary}`, `{secondary}` before sending.
pub const SUGGEST_PROMPT_TEMPLATE: &str = r#"Expert UX advice for a {category} design kit.
Vibe: {vibe}. Layout: {layout}. Colors: {primary}, {secondary}.

Provide exactly 3 short, actionable points for improving this design.
Return a JSON object with this EXACT schema (no extra fields):
{"suggestions": ["point 1", "point 2", "point 3"]}"#;
