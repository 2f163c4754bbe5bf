//! Background tokio runtime shared by the window's network work.

use anyhow::Context;
use tokio::runtime::{Builder, Runtime};

pub fn build_runtime() -> anyhow::Result<Runtime> {
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("citas-backend")
        .enable_all()
        .build()
        .context("failed to build backend runtime")?;
    tracing::debug!("backend runtime started");
    Ok(runtime)
}
