use std::sync::Arc;

use log::{info, warn};

use crate::clients::{
    PipelineError, RecognizeRequest, SpeechApi, TranslateRequest, TranslationApi,
};
use crate::encoder;
use crate::intake::AudioInput;

use super::state::PipelineStateManager;

/// Drives one transcribe-then-translate run against the remote services.
///
/// The two calls are strictly sequential: translation is only issued after
/// transcription succeeded with at least one usable result. There are no
/// retries and no cancellation; the busy guard in the state manager is the
/// only admission control.
pub struct PipelineRunner {
    speech: Box<dyn SpeechApi>,
    translation: Box<dyn TranslationApi>,
    state: Arc<PipelineStateManager>,
}

impl PipelineRunner {
    pub fn new(
        speech: Box<dyn SpeechApi>,
        translation: Box<dyn TranslationApi>,
        state: Arc<PipelineStateManager>,
    ) -> Self {
        Self {
            speech,
            translation,
            state,
        }
    }

    /// Run the full pipeline for the given input.
    ///
    /// A trigger while a run is in flight is a no-op. Every other path
    /// lands on a terminal state (`Succeeded` or `Failed`), so the busy
    /// slot is always released.
    pub async fn run(&self, input: Option<&AudioInput>) {
        if !self.state.try_begin() {
            warn!("Pipeline already running; trigger ignored");
            return;
        }

        let Some(input) = input else {
            self.state
                .set_failed(PipelineError::MissingInput.user_message());
            return;
        };

        match self.execute(input).await {
            Ok((source_text, translated_text)) => {
                info!(
                    "Pipeline finished: {} source chars, {} translated chars",
                    source_text.chars().count(),
                    translated_text.chars().count()
                );
                self.state.set_succeeded(source_text, translated_text);
            }
            Err(e) => {
                warn!("Pipeline failed: {}", e);
                self.state.set_failed(e.user_message());
            }
        }
    }

    async fn execute(&self, input: &AudioInput) -> Result<(String, String), PipelineError> {
        info!("Transcribing {} ({})", input.file_name(), input.mime_type());
        let payload = encoder::encode(input).await?;
        let request = RecognizeRequest::build(input, payload);
        let response = self.speech.recognize(request).await?;

        if response.is_empty() {
            return Err(PipelineError::NoSpeechDetected);
        }
        let source_text = response.source_text();

        self.state.set_translating();
        info!("Translating {} characters", source_text.chars().count());
        let translated = self
            .translation
            .translate(TranslateRequest::new(source_text.clone()))
            .await?;
        let translated_text = translated
            .translated_text()
            .ok_or(PipelineError::TranslationFailed)?
            .to_string();

        Ok((source_text, translated_text))
    }
}
