//! View controller: owns the appointment list and loads it once per mount.

use std::sync::Arc;

use shared::{domain::AppointmentRecord, error::FetchError};
use tokio::{
    runtime::Handle,
    sync::oneshot::{self, error::TryRecvError},
    task::JoinHandle,
};
use tracing::{error, info, warn};

use crate::{
    render::{render_rows, AppointmentRow},
    source::AppointmentSource,
};

type FetchOutcome = Result<Vec<AppointmentRecord>, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Loaded,
    /// Rendered exactly like `Pending`; only diagnostics can tell them apart.
    Failed,
}

pub struct AppointmentsController {
    appointments: Vec<AppointmentRecord>,
    status: FetchStatus,
    outcome_rx: Option<oneshot::Receiver<FetchOutcome>>,
    fetch_task: Option<JoinHandle<()>>,
}

impl AppointmentsController {
    /// Mounts the view and issues its single fetch on `runtime`.
    ///
    /// The fetch result only reaches the list through [`poll`](Self::poll) or
    /// [`settle`](Self::settle); dropping the controller aborts the request.
    pub fn mount(source: Arc<dyn AppointmentSource>, runtime: &Handle) -> Self {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let fetch_task = runtime.spawn(async move {
            let outcome = source.fetch_appointments().await;
            if let Err(err) = &outcome {
                error!(
                    endpoint = source.endpoint(),
                    error = %err,
                    "failed to load appointments"
                );
            }
            // The receiver is gone once the view has been torn down.
            let _ = outcome_tx.send(outcome);
        });

        Self {
            appointments: Vec::new(),
            status: FetchStatus::Pending,
            outcome_rx: Some(outcome_rx),
            fetch_task: Some(fetch_task),
        }
    }

    /// Applies the fetch result if it has arrived. Returns `true` when the
    /// state changed and the view should be redrawn.
    pub fn poll(&mut self) -> bool {
        let Some(outcome_rx) = self.outcome_rx.as_mut() else {
            return false;
        };

        match outcome_rx.try_recv() {
            Ok(outcome) => {
                self.apply(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.abandon();
                true
            }
        }
    }

    /// Waits for the fetch to finish and applies its result.
    pub async fn settle(&mut self) {
        let Some(outcome_rx) = self.outcome_rx.as_mut() else {
            return;
        };

        match outcome_rx.await {
            Ok(outcome) => self.apply(outcome),
            Err(_) => self.abandon(),
        }
    }

    pub fn appointments(&self) -> &[AppointmentRecord] {
        &self.appointments
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == FetchStatus::Pending
    }

    pub fn rows(&self) -> Vec<AppointmentRow> {
        render_rows(&self.appointments)
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        self.outcome_rx = None;
        self.fetch_task = None;

        match outcome {
            Ok(appointments) => {
                info!(count = appointments.len(), "appointments loaded");
                self.appointments = appointments;
                self.status = FetchStatus::Loaded;
            }
            // Already logged by the fetch task; the list keeps its value.
            Err(_) => self.status = FetchStatus::Failed,
        }
    }

    fn abandon(&mut self) {
        warn!("appointment fetch ended without delivering a result");
        self.outcome_rx = None;
        self.fetch_task = None;
        self.status = FetchStatus::Failed;
    }
}

impl Drop for AppointmentsController {
    fn drop(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
