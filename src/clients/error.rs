#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File too large: {size_bytes} bytes")]
    FileTooLarge { size_bytes: u64 },
    #[error("No audio file selected")]
    MissingInput,
    #[error("Failed to read audio file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("No speech detected in the audio")]
    NoSpeechDetected,
    #[error("Translation failed")]
    TranslationFailed,
    #[error("API key not configured")]
    ApiKeyMissing,
}

impl PipelineError {
    /// Returns a user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::FileTooLarge { .. } => {
                "File size too large. Maximum size is 10MB.".to_string()
            }
            PipelineError::MissingInput => "Please upload an audio file".to_string(),
            PipelineError::ReadError(_) => {
                "Failed to read audio file. Please try again.".to_string()
            }
            PipelineError::TranscriptionFailed(msg) => {
                // Parse for specific errors
                if msg.contains("429") || msg.to_lowercase().contains("rate limit") {
                    "Rate limit reached. Please wait and retry.".to_string()
                } else {
                    msg.clone()
                }
            }
            PipelineError::NoSpeechDetected => "No speech detected in the audio".to_string(),
            PipelineError::TranslationFailed => "Translation failed".to_string(),
            PipelineError::ApiKeyMissing => {
                "API key not configured. Set GOOGLE_API_KEY in the environment.".to_string()
            }
        }
    }
}
