use std::env;
use std::fmt;

use secrecy::SecretString;

use crate::clients::PipelineError;

/// Recognize endpoint for short files (synchronous recognition).
pub const SPEECH_ENDPOINT: &str = "https://speech.googleapis.com/v1/speech:recognize";
pub const TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

const API_KEY_VAR: &str = "GOOGLE_API_KEY";
const SPEECH_ENDPOINT_VAR: &str = "SPEECH_ENDPOINT";
const TRANSLATE_ENDPOINT_VAR: &str = "TRANSLATE_ENDPOINT";

/// Configuration for making the speech and translation API calls
pub struct ApiConfig {
    pub api_key: SecretString,
    pub speech_endpoint: String,
    pub translate_endpoint: String,
}

impl ApiConfig {
    /// Load configuration from the environment.
    ///
    /// Fails with `ApiKeyMissing` when `GOOGLE_API_KEY` is absent or blank,
    /// before any file is touched. Endpoint variables are optional overrides.
    pub fn from_env() -> Result<Self, PipelineError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| PipelineError::ApiKeyMissing)?;
        if api_key.trim().is_empty() {
            return Err(PipelineError::ApiKeyMissing);
        }

        Ok(Self {
            api_key: api_key.into(),
            speech_endpoint: env::var(SPEECH_ENDPOINT_VAR)
                .unwrap_or_else(|_| SPEECH_ENDPOINT.to_string()),
            translate_endpoint: env::var(TRANSLATE_ENDPOINT_VAR)
                .unwrap_or_else(|_| TRANSLATE_ENDPOINT.to_string()),
        })
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("speech_endpoint", &self.speech_endpoint)
            .field("translate_endpoint", &self.translate_endpoint)
            .finish()
    }
}
