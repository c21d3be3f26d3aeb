//! Command handlers - business logic for processing UI events and responses

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{group_items, Group, LoadState};

impl AppState {
    // ========================
    // List scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if u64::from(self.scroll) < self.max_scroll() {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    fn max_scroll(&self) -> u64 {
        match &self.load_state {
            LoadState::Success(groups) => content_lines(groups).saturating_sub(1) as u64,
            _ => 0,
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Fetch triggers
    //
    // All three triggers funnel through `begin_fetch`, and none of them
    // fires while a request is pending, so at most one fetch is ever in
    // flight.
    // ========================

    /// Startup trigger: fetch if the list was never loaded.
    pub fn begin_initial_load(&mut self) -> Option<NetworkCommand> {
        if self.load_state == LoadState::Loading && self.pending_request_id.is_none() {
            Some(self.begin_fetch())
        } else {
            None
        }
    }

    /// User trigger: only effective from the error screen.
    pub fn try_again(&mut self) -> Option<NetworkCommand> {
        if self.load_state == LoadState::Error && self.pending_request_id.is_none() {
            tracing::info!("User retry requested");
            Some(self.begin_fetch())
        } else {
            None
        }
    }

    /// Connectivity trigger: refetch when the network comes back while
    /// the error screen is showing.
    pub fn network_changed(&mut self, available: bool) -> Option<NetworkCommand> {
        self.network_available = available;
        if available
            && self.load_state == LoadState::Error
            && self.pending_request_id.is_none()
        {
            tracing::info!("Network recovered, refreshing");
            Some(self.begin_fetch())
        } else {
            None
        }
    }

    fn begin_fetch(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.load_state = LoadState::Loading;
        NetworkCommand::FetchItems {
            id,
            url: self.items_url.clone(),
        }
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Ignoring stale response");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::Items { items, time_ms, .. } => {
                self.last_fetch_ms = time_ms;
                self.scroll = 0;
                self.load_state = LoadState::Success(group_items(items));
            }
            NetworkResponse::Error { message, time_ms, .. } => {
                tracing::warn!(%message, time_ms, "Failed to fetch items");
                self.last_fetch_ms = time_ms;
                self.load_state = LoadState::Error;
            }
        }
    }
}

/// Rendered line count of the grouped list (one header line per group)
pub fn content_lines(groups: &[Group]) -> usize {
    groups.len() + groups.iter().map(|g| g.items.len()).sum::<usize>()
}
