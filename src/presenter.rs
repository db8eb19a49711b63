//! Renders pipeline state for the terminal. Exactly one view per state.

use crate::intake::AudioInput;
use crate::pipeline::PipelineState;

/// Selected-file summary shown before a run.
pub fn file_summary(input: &AudioInput) -> String {
    format!(
        "Selected file: {}\nSize: {:.2} MB\nType: {}",
        input.file_name(),
        input.size_mib(),
        input.mime_type()
    )
}

pub fn render(state: &PipelineState) -> String {
    match state {
        PipelineState::Idle => "Upload an audio file (wav/mp3) to transcribe.".to_string(),
        PipelineState::Transcribing | PipelineState::Translating => {
            "Processing... Please wait".to_string()
        }
        PipelineState::Succeeded {
            source_text,
            translated_text,
        } => format!(
            "Kannada Text:\n{}\n\nEnglish Translation:\n{}",
            source_text, translated_text
        ),
        PipelineState::Failed { message } => format!("Error: {}", message),
    }
}
