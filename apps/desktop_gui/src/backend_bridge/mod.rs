//! Async side of the GUI: the runtime the appointment fetch runs on.

pub mod runtime;
