use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;

use crate::clients::PipelineError;
use crate::intake::AudioInput;

/// Pure base64 audio content, ready to embed in a JSON request body.
///
/// Recomputed for every run; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudioPayload(String);

impl EncodedAudioPayload {
    /// Wrap a base64 string, stripping any leading `data:<mime>;base64,`
    /// marker so only the raw payload remains.
    pub fn from_base64(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.split_once(";base64,") {
            Some((prefix, rest)) if prefix.starts_with("data:") => Self(rest.to_string()),
            _ => Self(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Read the selected file and produce its base64 payload.
pub async fn encode(input: &AudioInput) -> Result<EncodedAudioPayload, PipelineError> {
    let bytes = tokio::fs::read(input.path()).await?;
    debug!("Encoded {} audio bytes to base64", bytes.len());
    Ok(EncodedAudioPayload::from_base64(BASE64.encode(&bytes)))
}
