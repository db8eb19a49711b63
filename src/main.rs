use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use dhwani::pipeline::PipelineState;
use dhwani::{presenter, ApiConfig, PipelineController};

#[derive(Debug, Parser)]
#[command(name = "dhwani")]
#[command(about = "Transcribe Kannada audio and translate it to English", long_about = None)]
struct Args {
    /// Path to a wav or mp3 file (10 MiB max).
    audio: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        }),
    )
    .init();

    let args = Args::parse();

    let config = ApiConfig::from_env().context("configuration error")?;
    let mut controller = PipelineController::new(&config);

    match controller.select_file(&args.audio) {
        Ok(input) => {
            println!("{}", presenter::file_summary(input));
            println!();
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    }

    println!("{}", presenter::render(&PipelineState::Transcribing));
    controller.transcribe().await;

    let state = controller.state();
    println!("{}", presenter::render(&state));

    if matches!(state, PipelineState::Failed { .. }) {
        std::process::exit(1);
    }

    Ok(())
}
