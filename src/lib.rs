pub mod clients;
pub mod config;
pub mod encoder;
pub mod intake;
pub mod pipeline;
pub mod presenter;

pub use clients::PipelineError;
pub use config::ApiConfig;
pub use pipeline::{PipelineController, PipelineState};
