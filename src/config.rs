use std::env;

use crate::constants::{
    API_KEY_ENV, API_KEY_PLACEHOLDER, DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL,
};

/// Settings for the remote editing pipeline, resolved once at startup and
/// passed into the processing functions. Nothing reads the environment after
/// construction.
#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

impl EditorConfig {
    /// Loads `.env` if present, then requires a real API key. A missing,
    /// empty, or placeholder key is a fatal startup error.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let api_key = env::var(API_KEY_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty() && value != API_KEY_PLACEHOLDER)
            .ok_or_else(|| {
                format!(
                    "{API_KEY_ENV} not found or not set. Please create a .env file and add your \
                     API key: {API_KEY_ENV}='YOUR_API_KEY'"
                )
            })?;

        Ok(Self {
            api_key,
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test mutates the process environment for every case so parallel
    // test threads never observe each other's values.
    #[test]
    fn from_env_accepts_only_a_real_key() {
        env::remove_var(API_KEY_ENV);
        assert!(EditorConfig::from_env().is_err());

        env::set_var(API_KEY_ENV, "");
        assert!(EditorConfig::from_env().is_err());

        env::set_var(API_KEY_ENV, API_KEY_PLACEHOLDER);
        let err = EditorConfig::from_env().unwrap_err();
        assert!(err.contains(API_KEY_ENV));

        env::set_var(API_KEY_ENV, "  real-key-123  ");
        let config = EditorConfig::from_env().expect("trimmed key should be accepted");
        assert_eq!(config.api_key, "real-key-123");
        assert_eq!(config.model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.endpoint, DEFAULT_GEMINI_ENDPOINT);

        env::remove_var(API_KEY_ENV);
    }
}
