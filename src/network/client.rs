//! HTTP client wrapper - posts contact payloads and classifies the outcome

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::messages::NetworkResponse;
use crate::models::ContactPayload;

/// POST the payload as JSON; any 2xx is delivered, everything else failed
pub async fn submit_contact(
    client: &reqwest::Client,
    endpoint: &str,
    payload: ContactPayload,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();

    let result = client.post(endpoint).json(&payload).send().await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(resp) if resp.status().is_success() => NetworkResponse::Delivered {
            id: request_id,
            status: resp.status().as_u16(),
            time_ms: elapsed,
        },
        Ok(resp) => NetworkResponse::Failed {
            id: request_id,
            message: format!("Unexpected status: {}", resp.status()),
            time_ms: elapsed,
        },
        Err(e) => {
            let msg = if e.is_timeout() {
                format!("Request timed out: {}", e)
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Failed {
                id: request_id,
                message: msg,
                time_ms: elapsed,
            }
        }
    }
}

/// Create an HTTP client, applying the configured timeout if any
pub fn create_client(config: &Config) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, timeout_secs = ?config.timeout_secs, "HTTP client build failed, using defaults without timeout");
        reqwest::Client::new()
    })
}
