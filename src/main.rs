mod app;
mod opentargets;
mod scores;
mod util;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::opentargets::HttpTransport;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Log filter directive; RUST_LOG takes precedence when set.
    #[arg(long, default_value = "assoc_lens=info")]
    log_filter: String,
    #[arg(long, default_value_t = 1280.0)]
    window_width: f32,
    #[arg(long, default_value_t = 860.0)]
    window_height: f32,
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to install log subscriber: {error}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_filter)?;
    info!(version = env!("CARGO_PKG_VERSION"), "assoc-lens starting");

    let transport = HttpTransport::new()?;
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.window_width, args.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "assoc-lens",
        options,
        Box::new(move |cc| Ok(Box::new(app::AssocLensApp::new(cc, transport)))),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}
