use std::path::{Path, PathBuf};

use log::{error, info};

use crate::clients::PipelineError;

/// The synchronous recognize endpoint rejects larger uploads.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// A validated audio file selected for transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioInput {
    path: PathBuf,
    file_name: String,
    size_bytes: u64,
    mime_type: String,
}

impl AudioInput {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// File size in MiB, rounded to two decimals for display.
    pub fn size_mib(&self) -> f64 {
        let mib = self.size_bytes as f64 / (1024.0 * 1024.0);
        (mib * 100.0).round() / 100.0
    }
}

/// Validates user-selected files and holds the current selection.
#[derive(Debug, Default)]
pub struct FileIntake {
    current: Option<AudioInput>,
}

impl FileIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a file and make it the current selection.
    ///
    /// A rejected file (too large, unreadable) leaves the previous
    /// selection in place.
    pub fn select(&mut self, path: &Path) -> Result<&AudioInput, PipelineError> {
        let metadata = std::fs::metadata(path)?;
        validate_size(metadata.len())?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let input = AudioInput {
            path: path.to_path_buf(),
            file_name,
            size_bytes: metadata.len(),
            mime_type: mime_type_for(path),
        };

        info!(
            "Selected {} ({:.2} MiB, {})",
            input.file_name,
            input.size_mib(),
            input.mime_type
        );

        Ok(&*self.current.insert(input))
    }

    pub fn current(&self) -> Option<&AudioInput> {
        self.current.as_ref()
    }
}

fn validate_size(size_bytes: u64) -> Result<(), PipelineError> {
    if size_bytes > MAX_FILE_SIZE_BYTES {
        error!(
            "File too large: {} bytes > {} bytes",
            size_bytes, MAX_FILE_SIZE_BYTES
        );
        return Err(PipelineError::FileTooLarge { size_bytes });
    }
    Ok(())
}

/// MIME type inferred from the file extension. Anything unrecognized ends
/// up as unspecified encoding on the wire, which the service can handle.
fn mime_type_for(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("wav") => "audio/wav".to_string(),
        Some("mp3") => "audio/mp3".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_audio_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(content).expect("write temp file");
        file
    }

    #[test]
    fn size_at_the_limit_is_accepted() {
        assert!(validate_size(MAX_FILE_SIZE_BYTES).is_ok());
    }

    #[test]
    fn size_over_the_limit_is_rejected() {
        let err = validate_size(MAX_FILE_SIZE_BYTES + 1).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::FileTooLarge { size_bytes } if size_bytes == MAX_FILE_SIZE_BYTES + 1
        ));
    }

    #[test]
    fn mime_type_follows_the_extension() {
        assert_eq!(mime_type_for(Path::new("call.wav")), "audio/wav");
        assert_eq!(mime_type_for(Path::new("call.MP3")), "audio/mp3");
        assert_eq!(
            mime_type_for(Path::new("call.ogg")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_type_for(Path::new("no-extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn select_stores_display_fields() {
        let file = temp_audio_file(".wav", b"RIFFdata");
        let mut intake = FileIntake::new();

        let input = intake.select(file.path()).expect("valid file");
        assert_eq!(input.size_bytes(), 8);
        assert_eq!(input.mime_type(), "audio/wav");
        assert!(input.file_name().ends_with(".wav"));
        assert!(intake.current().is_some());
    }

    #[test]
    fn missing_file_is_a_read_error_and_keeps_previous_selection() {
        let file = temp_audio_file(".mp3", b"ID3");
        let mut intake = FileIntake::new();
        intake.select(file.path()).expect("valid file");

        let err = intake
            .select(Path::new("/nonexistent/audio.wav"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::ReadError(_)));
        // Previous selection survives the failed pick
        assert_eq!(intake.current().map(|i| i.mime_type()), Some("audio/mp3"));
    }

    #[test]
    fn size_mib_rounds_to_two_decimals() {
        let input = AudioInput {
            path: PathBuf::from("call.wav"),
            file_name: "call.wav".to_string(),
            size_bytes: 2_621_440, // 2.5 MiB
            mime_type: "audio/wav".to_string(),
        };
        assert_eq!(input.size_mib(), 2.5);

        let odd = AudioInput {
            size_bytes: 1_234_567,
            ..input
        };
        assert_eq!(odd.size_mib(), 1.18);
    }
}
