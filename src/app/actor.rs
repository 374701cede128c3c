//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus navigation
            UiEvent::NextFocus => self.state.next_focus(),
            UiEvent::PrevFocus => self.state.prev_focus(),

            // Input editing
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Newline => self.state.enter_newline(),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Form actions
            UiEvent::Submit => {
                if let Some(cmd) = self.state.submit() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeedbackKind, Field};

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
    }

    impl Harness {
        fn spawn() -> Self {
            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (resp_tx, resp_rx) = mpsc::unbounded_channel();
            let (net_tx, net_rx) = mpsc::unbounded_channel();
            let (render_tx, render_rx) = mpsc::unbounded_channel();
            tokio::spawn(AppActor::new(net_tx, render_tx).run(ui_rx, resp_rx));
            Harness { ui_tx, resp_tx, net_rx, render_rx }
        }

        fn type_str(&self, text: &str) {
            for c in text.chars() {
                self.ui_tx.send(UiEvent::CharInput(c)).unwrap();
            }
        }

        /// Drain render states until the latest one after `count` updates
        async fn render_after(&mut self, count: usize) -> RenderState {
            let mut last = None;
            for _ in 0..count {
                last = self.render_rx.recv().await;
            }
            last.unwrap()
        }
    }

    #[tokio::test]
    async fn test_full_submission_round_trip() {
        let mut h = Harness::spawn();
        h.type_str("Jo");
        h.ui_tx.send(UiEvent::NextFocus).unwrap();
        h.type_str("jo@b");
        h.ui_tx.send(UiEvent::NextFocus).unwrap();
        h.type_str("hi");
        h.ui_tx.send(UiEvent::Submit).unwrap();

        // initial + 2 + 1 + 4 + 1 + 2 + 1
        let render = h.render_after(12).await;
        assert!(render.is_submitting);
        assert_eq!(render.submit_label(), "Sending...");

        let id = match h.net_rx.recv().await {
            Some(NetworkCommand::SubmitContact { id, payload }) => {
                assert_eq!(payload.email, "jo@b");
                id
            }
            other => panic!("expected submit command, got {:?}", other),
        };

        h.resp_tx.send(NetworkResponse::Delivered { id, status: 201, time_ms: 5 }).unwrap();
        let render = h.render_after(1).await;
        assert!(!render.is_submitting);
        assert!(render.fields.name.is_empty());
        assert_eq!(render.feedback.unwrap().kind, FeedbackKind::Success);
    }

    #[tokio::test]
    async fn test_blocked_submit_sends_no_command() {
        let mut h = Harness::spawn();
        h.ui_tx.send(UiEvent::Submit).unwrap();

        let render = h.render_after(2).await;
        assert_eq!(render.errors.len(), 3);
        assert!(render.errors.contains(Field::Message));
        assert!(h.net_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_quit_shuts_down_network() {
        let mut h = Harness::spawn();
        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert!(matches!(h.net_rx.recv().await, Some(NetworkCommand::Shutdown)));
    }
}
