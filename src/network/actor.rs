//! Network actor - executes fetch commands in the Tokio async runtime

use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::constants::{FETCH_ATTEMPTS, FETCH_RETRY_DELAY};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_items};
use crate::network::retry::run_with_retry;

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    in_flight: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            response_tx,
            in_flight: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchItems { id, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.in_flight.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching items");
                                let response = fetch_with_retry(&client, &url, id).await;
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.in_flight.join_next() => {}
            }
        }
    }
}

async fn fetch_with_retry(client: &reqwest::Client, url: &str, id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = run_with_retry(FETCH_ATTEMPTS, FETCH_RETRY_DELAY, || {
        fetch_items(client, url)
    })
    .await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(items) => {
            tracing::info!(id, count = items.len(), time_ms, "Fetch succeeded");
            NetworkResponse::Items { id, items, time_ms }
        }
        Err(e) => {
            tracing::warn!(id, error = %e, time_ms, "Fetch failed after retries");
            NetworkResponse::Error {
                id,
                message: e.to_string(),
                time_ms,
            }
        }
    }
}
