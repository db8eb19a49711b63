//! Pipeline state machine - single source of truth for the run lifecycle
//!
//! State diagram:
//! ```text
//! Idle ──begin──> Transcribing ──> Translating ──> Succeeded
//!                      │                │
//!                      └────────────────┴────────> Failed
//! ```
//!
//! `Succeeded` and `Failed` are terminal for a run; the next trigger
//! claims the busy slot again through `try_begin`. Exactly one state
//! holds at a time, so "busy with a result" is unrepresentable.

use std::sync::Mutex;

use log::debug;

/// Pipeline states
#[derive(Debug, Clone, PartialEq, strum::Display)]
pub enum PipelineState {
    /// Waiting for a selection or a trigger
    Idle,
    /// Speech request in flight
    Transcribing,
    /// Translation request in flight
    Translating,
    /// Both stages finished
    Succeeded {
        source_text: String,
        translated_text: String,
    },
    /// The run stopped at some stage
    Failed { message: String },
}

impl PipelineState {
    /// Check if a run is in flight (either remote call pending)
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Transcribing | Self::Translating)
    }
}

/// Thread-safe owner of the single pipeline state
#[derive(Debug)]
pub struct PipelineStateManager {
    state: Mutex<PipelineState>,
}

impl PipelineStateManager {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PipelineState::Idle),
        }
    }

    /// Get the current state (read-only, thread-safe)
    pub fn current(&self) -> PipelineState {
        self.state.lock().unwrap().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().is_busy()
    }

    /// Claim the busy slot for a new run.
    ///
    /// Returns false when a run is already in flight; the caller must then
    /// treat the trigger as a no-op.
    pub fn try_begin(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.is_busy() {
            return false;
        }
        *state = PipelineState::Transcribing;
        debug!("Pipeline state -> {}", *state);
        true
    }

    /// Move from the transcription stage to the translation stage
    pub fn set_translating(&self) {
        let mut state = self.state.lock().unwrap();
        *state = PipelineState::Translating;
        debug!("Pipeline state -> {}", *state);
    }

    pub fn set_succeeded(&self, source_text: String, translated_text: String) {
        let mut state = self.state.lock().unwrap();
        *state = PipelineState::Succeeded {
            source_text,
            translated_text,
        };
        debug!("Pipeline state -> {}", *state);
    }

    pub fn set_failed(&self, message: String) {
        let mut state = self.state.lock().unwrap();
        *state = PipelineState::Failed { message };
        debug!("Pipeline state -> {}", *state);
    }

    /// Reset to Idle, discarding any previous result or error
    pub fn reset(&self) {
        *self.state.lock().unwrap() = PipelineState::Idle;
    }
}

impl Default for PipelineStateManager {
    fn default() -> Self {
        Self::new()
    }
}
