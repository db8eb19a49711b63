//! Speech-to-Text API client and request construction.
//!
//! Builds the full recognition config (language hints, phrase boosts,
//! call metadata) and posts base64 audio to the recognize endpoint.

use async_trait::async_trait;
use log::{error, info};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::encoder::EncodedAudioPayload;
use crate::intake::AudioInput;

use super::error::PipelineError;

/// Common Kannada phrases (greetings, commerce vocabulary) boosted during
/// recognition.
pub const KANNADA_PHRASES: [&str; 11] = [
    "ನಮಸ್ಕಾರ",
    "ಹೇಗಿದ್ದೀರಿ",
    "ಧನ್ಯವಾದ",
    "ವ್ಯಾಪಾರ",
    "ಮಾರಾಟ",
    "ಬೆಲೆ",
    "ದರ",
    "ಹಣ",
    "ರೂಪಾಯಿ",
    "ಲೆಕ್ಕ",
    "ಪಾವತಿ",
];

const PHRASE_BOOST: f32 = 15.0;

const PRIMARY_LANGUAGE: &str = "kn-IN";
const ALTERNATIVE_LANGUAGE: &str = "en-IN";
const RECOGNITION_MODEL: &str = "latest_long";

/// Wire encoding of the uploaded audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AudioEncoding {
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "ENCODING_UNSPECIFIED")]
    Unspecified,
}

impl AudioEncoding {
    /// Infer the encoding from the declared MIME type. No sample rate is
    /// sent either way; the service detects it from the content.
    pub fn from_mime_type(mime_type: &str) -> Self {
        if mime_type.contains("wav") {
            Self::Linear16
        } else if mime_type.contains("mp3") {
            Self::Mp3
        } else {
            Self::Unspecified
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub language_code: String,
    pub alternative_language_codes: Vec<String>,
    pub enable_automatic_punctuation: bool,
    pub model: String,
    pub encoding: AudioEncoding,
    pub audio_channel_count: u32,
    pub enable_word_time_offsets: bool,
    pub enable_word_confidence: bool,
    pub use_enhanced: bool,
    pub metadata: RecognitionMetadata,
    pub max_alternatives: u32,
    pub profanity_filter: bool,
    pub adaptation: SpeechAdaptation,
    pub speech_contexts: Vec<SpeechContext>,
}

/// Hints about the recording situation, fixed to phone-call-quality values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionMetadata {
    pub interaction_type: String,
    pub microphone_distance: String,
    pub original_media_type: String,
    pub recording_device_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechAdaptation {
    pub phrase_sets: Vec<PhraseSet>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseSet {
    pub phrases: Vec<BoostedPhrase>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoostedPhrase {
    pub value: String,
    pub boost: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeechContext {
    pub phrases: Vec<String>,
    pub boost: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecognitionAudio {
    pub content: String,
}

impl RecognizeRequest {
    /// Build the recognition request for one audio input.
    ///
    /// The vocabulary goes through both biasing mechanisms the service
    /// offers (adaptation phrase set and inline speech context), with the
    /// same boost; they are applied independently server-side.
    pub fn build(input: &AudioInput, payload: EncodedAudioPayload) -> Self {
        Self {
            config: RecognitionConfig {
                language_code: PRIMARY_LANGUAGE.to_string(),
                alternative_language_codes: vec![ALTERNATIVE_LANGUAGE.to_string()],
                enable_automatic_punctuation: true,
                model: RECOGNITION_MODEL.to_string(),
                encoding: AudioEncoding::from_mime_type(input.mime_type()),
                audio_channel_count: 1,
                enable_word_time_offsets: true,
                enable_word_confidence: true,
                use_enhanced: true,
                metadata: RecognitionMetadata {
                    interaction_type: "PHONE_CALL".to_string(),
                    microphone_distance: "NEARFIELD".to_string(),
                    original_media_type: "AUDIO".to_string(),
                    recording_device_type: "PHONE_LINE".to_string(),
                },
                max_alternatives: 1,
                profanity_filter: false,
                adaptation: SpeechAdaptation {
                    phrase_sets: vec![PhraseSet {
                        phrases: KANNADA_PHRASES
                            .iter()
                            .map(|phrase| BoostedPhrase {
                                value: phrase.to_string(),
                                boost: PHRASE_BOOST,
                            })
                            .collect(),
                    }],
                },
                speech_contexts: vec![SpeechContext {
                    phrases: KANNADA_PHRASES.iter().map(|p| p.to_string()).collect(),
                    boost: PHRASE_BOOST,
                }],
            },
            audio: RecognitionAudio {
                content: payload.into_inner(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeResponse {
    /// Omitted entirely by the service when nothing was recognized.
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionAlternative {
    pub transcript: String,
}

impl RecognizeResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The top alternative of every segment, space-joined in result order.
    pub fn source_text(&self) -> String {
        self.results
            .iter()
            .filter_map(|result| result.alternatives.first())
            .map(|alternative| alternative.transcript.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorStatus>,
}

#[derive(Debug, Deserialize)]
struct ErrorStatus {
    message: Option<String>,
}

/// Speech recognition API seam. Mocked in tests.
#[async_trait]
pub trait SpeechApi: Send + Sync {
    async fn recognize(&self, request: RecognizeRequest)
        -> Result<RecognizeResponse, PipelineError>;
}

/// Speech-to-Text API client, authenticated via a query-string key.
pub struct SpeechClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl SpeechClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.speech_endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl SpeechApi for SpeechClient {
    async fn recognize(
        &self,
        request: RecognizeRequest,
    ) -> Result<RecognizeResponse, PipelineError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Speech API request error: {}", e);
                PipelineError::TranscriptionFailed("Transcription failed".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|status| status.message)
                .unwrap_or_else(|| "Transcription failed".to_string());
            error!("Speech API error response ({}): {}", status, message);
            return Err(PipelineError::TranscriptionFailed(message));
        }

        let parsed: RecognizeResponse = response.json().await.map_err(|e| {
            error!("Failed to parse speech response: {}", e);
            PipelineError::TranscriptionFailed("Failed to parse response".to_string())
        })?;

        info!("Speech API returned {} result segments", parsed.results.len());

        Ok(parsed)
    }
}
