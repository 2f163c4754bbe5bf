use std::{
    io,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::MakeWriter;

pub const CITAS_PATH: &str = "/api/citas/";

#[derive(Clone)]
struct CitasServerState {
    status: StatusCode,
    body: Arc<String>,
    hits: Arc<AtomicUsize>,
}

async fn serve_citas(State(state): State<CitasServerState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_owned(),
    )
}

/// Serves a fixed response on `/api/citas/` and counts the requests it sees.
pub async fn spawn_citas_server(
    status: StatusCode,
    body: impl Into<String>,
) -> Result<(String, Arc<AtomicUsize>)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let hits = Arc::new(AtomicUsize::new(0));
    let state = CitasServerState {
        status,
        body: Arc::new(body.into()),
        hits: hits.clone(),
    };
    let app = Router::new()
        .route(CITAS_PATH, get(serve_citas))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}{CITAS_PATH}"), hits))
}

/// An endpoint URL on a port nothing listens on.
pub async fn unreachable_endpoint() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}{CITAS_PATH}"))
}

/// Collects formatted log output for the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn error_lines(&self) -> Vec<String> {
        let buffer = self.0.lock().expect("log buffer");
        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| line.trim_start().starts_with("ERROR"))
            .map(str::to_owned)
            .collect()
    }
}

pub struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(self.0.clone())
    }
}
