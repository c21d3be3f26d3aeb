//! App state - pure data structure with no I/O logic

use crate::messages::RenderState;
use crate::models::LoadState;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub load_state: LoadState,
    pub scroll: u16,

    /// Endpoint the list is fetched from
    pub items_url: String,

    /// Last connectivity reading
    pub network_available: bool,

    // Fetch bookkeeping. `pending_request_id` doubles as the in-flight
    // guard: no new fetch is issued while it is Some, and responses
    // carrying any other id are discarded.
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub last_fetch_ms: u64,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(items_url: String) -> Self {
        AppState {
            load_state: LoadState::Loading,
            scroll: 0,
            items_url,
            network_available: true,
            next_request_id: 1,
            pending_request_id: None,
            last_fetch_ms: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            load_state: self.load_state.clone(),
            scroll: self.scroll,
            network_available: self.network_available,
            last_fetch_ms: self.last_fetch_ms,
            show_help: self.show_help,
        }
    }
}
