//! Network layer - outbound HTTP submissions
//!
//! The Network actor receives submission commands and sends back outcomes.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
