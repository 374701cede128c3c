//! Network messages - communication between App and Network layers

use crate::models::ContactPayload;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// POST a validated contact payload
    SubmitContact {
        id: u64,
        payload: ContactPayload,
    },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Backend answered with a 2xx status
    Delivered {
        id: u64,
        status: u16,
        time_ms: u64,
    },
    /// Transport error, timeout, or non-2xx status
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Delivered { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
