//! App actor - message loop processing UI events, network responses, and
//! connectivity updates

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{ConnectivityUpdate, NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that owns the state and serializes all fetch triggers
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        items_url: String,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(items_url),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
        mut conn_rx: mpsc::UnboundedReceiver<ConnectivityUpdate>,
    ) {
        // Kick off the initial load before processing any messages
        if let Some(cmd) = self.state.begin_initial_load() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(update) = conn_rx.recv() => {
                    if let Some(cmd) = self.state.network_changed(update.available) {
                        let _ = self.network_tx.send(cmd);
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),
            UiEvent::TryAgain => {
                if let Some(cmd) = self.state.try_again() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemRecord, LoadState};

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        conn_tx: mpsc::UnboundedSender<ConnectivityUpdate>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
    }

    impl Harness {
        fn spawn() -> Self {
            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
            let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
            let (conn_tx, conn_rx) = mpsc::unbounded_channel();
            let (render_tx, render_rx) = mpsc::unbounded_channel();

            let actor = AppActor::new("https://example.com/items.json".into(), net_cmd_tx, render_tx);
            tokio::spawn(actor.run(ui_rx, net_resp_rx, conn_rx));

            Harness {
                ui_tx,
                conn_tx,
                net_resp_tx,
                net_cmd_rx,
                render_rx,
            }
        }

        /// Wait for the fetch command the actor should have issued
        async fn expect_fetch(&mut self) -> u64 {
            match self.net_cmd_rx.recv().await {
                Some(NetworkCommand::FetchItems { id, .. }) => id,
                other => panic!("expected fetch command, got {:?}", other),
            }
        }

        /// Wait for the next render state
        async fn next_render(&mut self) -> RenderState {
            self.render_rx.recv().await.expect("render channel closed")
        }

        fn respond_ok(&self, id: u64) {
            self.net_resp_tx
                .send(NetworkResponse::Items {
                    id,
                    items: vec![
                        ItemRecord::new(2, 1, Some("Banana")),
                        ItemRecord::new(1, 1, Some("Apple")),
                        ItemRecord::new(3, 2, None),
                    ],
                    time_ms: 20,
                })
                .unwrap();
        }

        fn respond_err(&self, id: u64) {
            self.net_resp_tx
                .send(NetworkResponse::Error {
                    id,
                    message: "connection failed".into(),
                    time_ms: 5,
                })
                .unwrap();
        }
    }

    #[tokio::test]
    async fn starts_loading_and_fetches() {
        let mut h = Harness::spawn();
        h.expect_fetch().await;
        let state = h.next_render().await;
        assert_eq!(state.load_state, LoadState::Loading);
    }

    #[tokio::test]
    async fn successful_fetch_renders_groups() {
        let mut h = Harness::spawn();
        let id = h.expect_fetch().await;
        h.next_render().await;

        h.respond_ok(id);
        let state = h.next_render().await;
        let LoadState::Success(groups) = state.load_state else {
            panic!("expected success, got {:?}", state.load_state);
        };
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Banana"]);
    }

    #[tokio::test]
    async fn failed_fetch_renders_error() {
        let mut h = Harness::spawn();
        let id = h.expect_fetch().await;
        h.next_render().await;

        h.respond_err(id);
        let state = h.next_render().await;
        assert_eq!(state.load_state, LoadState::Error);
    }

    #[tokio::test]
    async fn user_retry_from_error_fetches_again() {
        let mut h = Harness::spawn();
        let id = h.expect_fetch().await;
        h.next_render().await;
        h.respond_err(id);
        h.next_render().await;

        h.ui_tx.send(UiEvent::TryAgain).unwrap();
        let retry_id = h.expect_fetch().await;
        assert!(retry_id > id);

        // State flips to loading before the fetch completes
        let state = h.next_render().await;
        assert_eq!(state.load_state, LoadState::Loading);

        h.respond_ok(retry_id);
        let state = h.next_render().await;
        assert!(matches!(state.load_state, LoadState::Success(_)));
    }

    #[tokio::test]
    async fn retry_outside_error_is_ignored() {
        let mut h = Harness::spawn();
        let id = h.expect_fetch().await;
        h.next_render().await;
        h.respond_ok(id);
        h.next_render().await;

        h.ui_tx.send(UiEvent::TryAgain).unwrap();
        let state = h.next_render().await;
        assert!(matches!(state.load_state, LoadState::Success(_)));
        assert!(h.net_cmd_rx.try_recv().is_err(), "no fetch expected");
    }

    #[tokio::test]
    async fn connectivity_recovery_refetches_from_error() {
        let mut h = Harness::spawn();
        let id = h.expect_fetch().await;
        h.next_render().await;
        h.respond_err(id);
        h.next_render().await;

        h.conn_tx.send(ConnectivityUpdate { available: false }).unwrap();
        let state = h.next_render().await;
        assert!(!state.network_available);
        assert!(h.net_cmd_rx.try_recv().is_err());

        h.conn_tx.send(ConnectivityUpdate { available: true }).unwrap();
        let recovery_id = h.expect_fetch().await;
        h.next_render().await;

        h.respond_ok(recovery_id);
        let state = h.next_render().await;
        assert!(matches!(state.load_state, LoadState::Success(_)));
    }

    #[tokio::test]
    async fn stale_response_does_not_change_state() {
        let mut h = Harness::spawn();
        let id = h.expect_fetch().await;
        h.next_render().await;

        h.respond_ok(id + 100);
        let state = h.next_render().await;
        assert_eq!(state.load_state, LoadState::Loading);

        h.respond_ok(id);
        let state = h.next_render().await;
        assert!(matches!(state.load_state, LoadState::Success(_)));
    }

    #[tokio::test]
    async fn quit_shuts_down_network_actor() {
        let mut h = Harness::spawn();
        h.expect_fetch().await;
        h.next_render().await;

        h.ui_tx.send(UiEvent::Quit).unwrap();
        match h.net_cmd_rx.recv().await {
            Some(NetworkCommand::Shutdown) => {}
            other => panic!("expected shutdown, got {:?}", other),
        }
    }
}
