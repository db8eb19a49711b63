//! Translation API client.
//!
//! Sends the recognized Kannada text to the v2 translate endpoint and
//! extracts the English rendering.

use async_trait::async_trait;
use log::{error, info};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;

use super::error::PipelineError;

const SOURCE_LANGUAGE: &str = "kn";
const TARGET_LANGUAGE: &str = "en";
const TRANSLATION_MODEL: &str = "nmt";

#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest {
    pub q: String,
    pub source: String,
    pub target: String,
    pub format: String,
    pub model: String,
}

impl TranslateRequest {
    /// Fixed-direction request: Kannada source, English target, plain text,
    /// neural model.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            q: text.into(),
            source: SOURCE_LANGUAGE.to_string(),
            target: TARGET_LANGUAGE.to_string(),
            format: "text".to_string(),
            model: TRANSLATION_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub data: TranslationList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationList {
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
}

impl TranslateResponse {
    /// The first translation's text, if the service returned one.
    pub fn translated_text(&self) -> Option<&str> {
        self.data
            .translations
            .first()
            .map(|translation| translation.translated_text.as_str())
    }
}

/// Translation API seam. Mocked in tests.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    async fn translate(&self, request: TranslateRequest)
        -> Result<TranslateResponse, PipelineError>;
}

/// Translation API client, authenticated via a query-string key.
pub struct TranslateClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl TranslateClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.translate_endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl TranslationApi for TranslateClient {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, PipelineError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Translation API request error: {}", e);
                PipelineError::TranslationFailed
            })?;

        if !response.status().is_success() {
            // The error body is not parsed for this stage
            error!("Translation API error response: {}", response.status());
            return Err(PipelineError::TranslationFailed);
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            error!("Failed to parse translation response: {}", e);
            PipelineError::TranslationFailed
        })?;

        info!(
            "Translation API returned {} translations",
            parsed.data.translations.len()
        );

        Ok(parsed)
    }
}
