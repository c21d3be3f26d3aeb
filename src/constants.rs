//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Default URL of the items endpoint
pub const DEFAULT_ITEMS_URL: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Total fetch attempts per refresh (first try included)
pub const FETCH_ATTEMPTS: u32 = 3;

/// Delay between fetch attempts
pub const FETCH_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Per-request HTTP timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How often the connectivity watcher probes the endpoint host
pub const CONNECTIVITY_PROBE_INTERVAL: Duration = Duration::from_secs(5);

/// How long a single probe may take before counting as offline
pub const CONNECTIVITY_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Log file name, written to the working directory
pub const LOG_FILE: &str = "shelf.log";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Shelf TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
