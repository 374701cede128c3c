//! # Contact Form TUI
//!
//! A terminal contact form that collects a name, email, and message,
//! validates them locally, and POSTs them as JSON to a backend endpoint.
//!
//! ## Features
//! - Inline per-field validation messages
//! - Single in-flight submission with a disabled "Sending..." control
//! - Success / failure feedback, fields reset on success
//! - Endpoint configurable via `~/.contact-form/config.yaml` or `CONTACT_FORM_ENDPOINT`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod models;
pub mod validation;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use models::{ContactPayload, Field, FieldErrors, FormFields, SubmissionState};
pub use validation::validate;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
