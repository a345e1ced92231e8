use log::Level;
use thiserror::Error;

pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const IMAGE_MODEL: &str = "imagen-4.0-generate-001";

pub const IDEA_TEMPERATURE: f32 = 0.8;
pub const IDEA_MAX_OUTPUT_TOKENS: u32 = 200;
pub const IDEA_THINKING_BUDGET: u32 = 100;

pub const IMAGE_COUNT: u32 = 1;
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";
pub const IMAGE_ASPECT_RATIO: &str = "4:3";

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY was not set when the site was built")]
    MissingApiKey,
}

/// Key for the hosted generative models, baked in at build time
/// (`GEMINI_API_KEY=... trunk build`).
pub fn get_api_key() -> Result<&'static str, ConfigError> {
    api_key_from(option_env!("GEMINI_API_KEY"))
}

fn api_key_from(raw: Option<&'static str>) -> Result<&'static str, ConfigError> {
    match raw.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

pub fn get_api_base_url() -> &'static str {
    option_env!("GEMINI_API_BASE")
        .map(|base| base.trim_end_matches('/'))
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_rejected() {
        assert_eq!(api_key_from(None), Err(ConfigError::MissingApiKey));
        assert_eq!(api_key_from(Some("   ")), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_key_is_trimmed() {
        assert_eq!(api_key_from(Some(" abc123 \n")), Ok("abc123"));
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!get_api_base_url().ends_with('/'));
    }
}
