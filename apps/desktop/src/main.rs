use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{
    config::load_settings, render_text, AppointmentsController, HttpAppointmentSource,
};
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

/// Prints the appointment list served by the citas endpoint.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured appointments endpoint.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings()?.with_api_url_override(args.api_url)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(endpoint = %settings.api_url, "loading appointments");

    let source = Arc::new(HttpAppointmentSource::new(settings.api_url));
    let mut controller = AppointmentsController::mount(source, &Handle::current());
    controller.settle().await;

    print!("{}", render_text(&controller.rows()));
    Ok(())
}
