mod error;
pub mod speech;
pub mod translate;

// Re-export public types
pub use error::PipelineError;
pub use speech::{RecognizeRequest, RecognizeResponse, SpeechApi, SpeechClient};
pub use translate::{TranslateClient, TranslateRequest, TranslateResponse, TranslationApi};
