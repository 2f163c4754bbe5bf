use std::sync::Arc;

mod backend_bridge;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{
    config::load_settings, render::LIST_HEADING, AppointmentsController, HttpAppointmentSource,
};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::runtime::build_runtime;
use crate::ui::CitasApp;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured appointments endpoint.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings()?.with_api_url_override(args.api_url)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let runtime = build_runtime()?;
    let source = Arc::new(HttpAppointmentSource::new(settings.api_url.clone()));
    let controller = AppointmentsController::mount(source, runtime.handle());
    tracing::info!(endpoint = %settings.api_url, "appointments view mounted");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(LIST_HEADING)
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        LIST_HEADING,
        options,
        Box::new(move |_cc| Ok(Box::new(CitasApp::new(controller, runtime)))),
    )
    .map_err(|err| anyhow!("appointments window failed: {err}"))
}
