use std::path::Path;
use std::sync::Arc;

use crate::clients::{PipelineError, SpeechApi, SpeechClient, TranslateClient, TranslationApi};
use crate::config::ApiConfig;
use crate::intake::{AudioInput, FileIntake};

use super::runner::PipelineRunner;
use super::state::{PipelineState, PipelineStateManager};

/// Owns the current selection and pipeline state for the life of the
/// process, and wires the intake to the runner.
pub struct PipelineController {
    intake: FileIntake,
    state: Arc<PipelineStateManager>,
    runner: PipelineRunner,
}

impl PipelineController {
    /// Build a controller talking to the real APIs.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_clients(
            Box::new(SpeechClient::new(config)),
            Box::new(TranslateClient::new(config)),
        )
    }

    /// Build a controller with explicit clients (used by tests).
    pub fn with_clients(speech: Box<dyn SpeechApi>, translation: Box<dyn TranslationApi>) -> Self {
        let state = Arc::new(PipelineStateManager::new());
        let runner = PipelineRunner::new(speech, translation, Arc::clone(&state));
        Self {
            intake: FileIntake::new(),
            state,
            runner,
        }
    }

    /// Select an audio file.
    ///
    /// Acceptance discards any previous result or error; a rejected file
    /// changes nothing.
    pub fn select_file(&mut self, path: &Path) -> Result<&AudioInput, PipelineError> {
        let input = self.intake.select(path)?;
        self.state.reset();
        Ok(input)
    }

    pub fn selected(&self) -> Option<&AudioInput> {
        self.intake.current()
    }

    /// Whether the trigger is allowed: a file is selected and no run is
    /// active.
    pub fn can_transcribe(&self) -> bool {
        self.intake.current().is_some() && !self.state.is_busy()
    }

    /// Run transcription and translation for the current selection.
    pub async fn transcribe(&self) {
        self.runner.run(self.intake.current()).await;
    }

    pub fn state(&self) -> PipelineState {
        self.state.current()
    }
}
