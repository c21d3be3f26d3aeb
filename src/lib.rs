//! # Shelf TUI
//!
//! A terminal viewer for grouped item lists served over HTTP.
//!
//! ## Features
//! - Fetches a flat JSON item list from a remote endpoint
//! - Groups by `listId`, drops null/blank names, sorts groups and items
//! - Loading spinner, error screen with retry, scrollable grouped list
//! - Automatic retry (3 attempts, 1 s apart) on every fetch
//! - Auto-refresh when network connectivity recovers
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;
pub mod constants;

// Re-export commonly used types
pub use models::{Group, GroupItem, ItemRecord, LoadState};
pub use messages::{ConnectivityUpdate, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState};
pub use network::NetworkActor;
