use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

mod app;
mod common;
mod config;
mod infrastructure;
mod modules;
mod pipeline;
mod state;

/// Uploads a local media file and submits a transcode job that
/// normalizes it to MP4 (H.264 + AAC).
#[derive(Parser)]
#[command(name = "mediajob")]
struct Cli {
    /// Path to the local media file
    input: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match config::settings::AppConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = match app::bootstrap(config).await {
        Ok(state) => state,
        Err(e) => {
            error!("{} failed: {e}", e.stage());
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(&state, &cli.input).await {
        Ok(job) => {
            info!("✅ Job submitted for {}", job.artifact.object_key());
            println!("{}", job.job_id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{} stage failed: {e}", e.stage());
            ExitCode::FAILURE
        }
    }
}
