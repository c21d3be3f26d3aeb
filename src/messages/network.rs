//! Network messages - communication between App and Network layers

use crate::models::ItemRecord;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the item list (with built-in retry)
    FetchItems { id: u64, url: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Item list fetched and deserialized
    Items {
        id: u64,
        items: Vec<ItemRecord>,
        time_ms: u64,
    },
    /// Fetch failed after all retry attempts
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Items { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}

/// Connectivity transition published by the watcher task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityUpdate {
    pub available: bool,
}
