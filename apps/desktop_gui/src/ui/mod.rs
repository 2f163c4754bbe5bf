//! UI layer for the desktop GUI: the appointments window.

pub mod app;

pub use app::CitasApp;
