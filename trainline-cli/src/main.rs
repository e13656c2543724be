use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trainline_cli::app::{self, AppError};
use trainline_cli::cli::Args;
use trainline_cli::config::Settings;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match search(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn search(args: &Args) -> Result<usize, AppError> {
    let settings = Settings::from_env()?;
    let client = settings.connect()?;
    let now = chrono::Local::now().naive_local();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(args, now, client.as_ref(), &mut out).await
}

/// Diagnostics go to stderr so stdout carries only the results.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
