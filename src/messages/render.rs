//! Render state - data structure sent from App layer to UI for rendering

use crate::models::LoadState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub load_state: LoadState,
    pub scroll: u16,

    /// Last connectivity reading, for the status bar indicator
    pub network_available: bool,

    /// Round-trip time of the last completed fetch
    pub last_fetch_ms: u64,

    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            load_state: LoadState::Loading,
            scroll: 0,
            network_available: true,
            last_fetch_ms: 0,
            show_help: false,
        }
    }
}
