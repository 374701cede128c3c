//! Network actor - runs contact submissions in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, submit_contact};

/// Network actor that processes submission commands
pub struct NetworkActor {
    client: reqwest::Client,
    endpoint: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(config),
            endpoint: config.endpoint.clone(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::SubmitContact { id, payload }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let endpoint = self.endpoint.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, endpoint = %endpoint, "Submitting contact form");
                                let result = submit_contact(&client, &endpoint, payload, id).await;
                                if let NetworkResponse::Delivered { status, time_ms, .. } = &result {
                                    tracing::info!(id, status, time_ms, "Submission delivered");
                                }
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - the task already reported its result
                }
            }
        }
    }
}
