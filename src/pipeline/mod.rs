mod controller;
mod runner;
mod state;

// Public exports
pub use controller::PipelineController;
pub use runner::PipelineRunner;
pub use state::{PipelineState, PipelineStateManager};
