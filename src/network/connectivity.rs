//! Connectivity watcher - probes the endpoint host and publishes transitions

use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::constants::{CONNECTIVITY_PROBE_INTERVAL, CONNECTIVITY_PROBE_TIMEOUT};
use crate::messages::ConnectivityUpdate;

/// Derive the host and port to probe from the items URL
pub fn probe_target(url: &str) -> Option<(String, u16)> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_string();
    let port = parsed.port_or_known_default()?;
    Some((host, port))
}

/// Probe reachability forever, sending an update on every transition
/// (plus the initial reading). Exits when the receiver is dropped.
pub async fn watch_connectivity(
    host: String,
    port: u16,
    update_tx: mpsc::UnboundedSender<ConnectivityUpdate>,
) {
    let mut last: Option<bool> = None;

    loop {
        let available = probe(&host, port).await;
        if last != Some(available) {
            last = Some(available);
            tracing::info!(available, host = %host, "Connectivity changed");
            if update_tx.send(ConnectivityUpdate { available }).is_err() {
                return;
            }
        }
        tokio::time::sleep(CONNECTIVITY_PROBE_INTERVAL).await;
    }
}

async fn probe(host: &str, port: u16) -> bool {
    matches!(
        timeout(CONNECTIVITY_PROBE_TIMEOUT, TcpStream::connect((host, port))).await,
        Ok(Ok(_))
    )
}
