//! Client side of the appointments viewer: the remote data source, the view
//! controller that loads it once per mount, and the row renderer.

pub mod config;
pub mod controller;
pub mod render;
pub mod source;

pub use controller::{AppointmentsController, FetchStatus};
pub use render::{render_rows, render_text, AppointmentRow};
pub use shared::{domain::AppointmentRecord, error::FetchError};
pub use source::{AppointmentSource, HttpAppointmentSource};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
