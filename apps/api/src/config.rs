use anyhow::{bail, Context, Result};

/// Upper bound on the photo-search timeout; image lookup is best-effort.
pub const MAX_IMAGE_SEARCH_TIMEOUT_MS: u64 = 2000;

/// Application configuration loaded from environment variables.
///
/// Third-party credentials are optional: without them the image lookup serves
/// the fallback image and the suggestion endpoint reports a failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub unsplash_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub image_search_timeout_ms: u64,
    pub style_backend: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://design_logs.db".to_string()),
            unsplash_api_key: optional_env("UNSPLASH_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            image_search_timeout_ms: parse_image_search_timeout(
                &std::env::var("IMAGE_SEARCH_TIMEOUT_MS")
                    .unwrap_or_else(|_| MAX_IMAGE_SEARCH_TIMEOUT_MS.to_string()),
            )?,
            style_backend: std::env::var("STYLE_BACKEND").unwrap_or_else(|_| "rule".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Parses `IMAGE_SEARCH_TIMEOUT_MS`. Must lie in `1..=MAX_IMAGE_SEARCH_TIMEOUT_MS`.
fn parse_image_search_timeout(raw: &str) -> Result<u64> {
    let ms = raw
        .trim()
        .parse::<u64>()
        .context("IMAGE_SEARCH_TIMEOUT_MS must be a whole number of milliseconds")?;
    if !(1..=MAX_IMAGE_SEARCH_TIMEOUT_MS).contains(&ms) {
        bail!("IMAGE_SEARCH_TIMEOUT_MS must be between 1 and {MAX_IMAGE_SEARCH_TIMEOUT_MS}, got {ms}");
    }
    Ok(ms)
}

/// Reads an optional variable. Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("KITGEN_TEST_BLANK_KEY", "   ");
        assert_eq!(optional_env("KITGEN_TEST_BLANK_KEY"), None);

        std::env::set_var("KITGEN_TEST_SET_KEY", " abc ");
        assert_eq!(optional_env("KITGEN_TEST_SET_KEY"), Some("abc".to_string()));

        assert_eq!(optional_env("KITGEN_TEST_NEVER_SET_KEY"), None);
    }

    #[test]
    fn test_image_search_timeout_bounds() {
        assert_eq!(parse_image_search_timeout("2000").unwrap(), 2000);
        assert_eq!(parse_image_search_timeout(" 250 ").unwrap(), 250);
        assert_eq!(parse_image_search_timeout("1").unwrap(), 1);
        assert!(parse_image_search_timeout("0").is_err());
        assert!(parse_image_search_timeout("2001").is_err());
        assert!(parse_image_search_timeout("60000").is_err());
        assert!(parse_image_search_timeout("soon").is_err());
    }
}
