//! App actor - message loop processing UI events and network responses

use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// How often expired toasts are swept
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
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
        if let Some(cmd) = self.state.mount() {
            self.send(cmd);
        }
        self.publish();

        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    let Some(event) = event else {
                        // UI loop is gone
                        self.send(NetworkCommand::Shutdown);
                        break;
                    };
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        self.send(NetworkCommand::Shutdown);
                        break;
                    }
                    self.publish();
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    self.publish();
                }
                _ = ticker.tick() => {
                    if self.state.tick(Utc::now()) {
                        self.publish();
                    }
                }
            }
        }
    }

    fn send(&self, cmd: NetworkCommand) {
        if self.network_tx.send(cmd).is_err() {
            tracing::warn!("Network actor is gone, command dropped");
        }
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // List
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::Select(index) => self.state.select(index),

            // Dialogs
            UiEvent::OpenAdd => self.state.open_add(),
            UiEvent::OpenEdit => self.state.open_edit(),
            UiEvent::OpenDelete => self.state.open_delete(),
            UiEvent::OpenEditAt(index) => {
                self.state.select(index);
                self.state.open_edit();
            }
            UiEvent::OpenDeleteAt(index) => {
                self.state.select(index);
                self.state.open_delete();
            }
            UiEvent::CloseModal => self.state.close_modal(),

            // Form
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::FormInput(input) => self.state.edit_form(input),

            UiEvent::Submit => {
                if let Some(cmd) = self.state.submit() {
                    self.send(cmd);
                }
            }

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormField, FormInput};
    use crate::models::{Gender, User, UserId};
    use crate::notify::ToastLevel;

    fn ann() -> User {
        User {
            id: UserId::from(1),
            name: "Ann".into(),
            surname: "Lee".into(),
            avatar_url: "x.png".into(),
            age: "30".into(),
            gender: Some(Gender::Female),
        }
    }

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_actor() -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(
            AppState::new(chrono::Duration::seconds(5)),
            net_cmd_tx,
            render_tx,
        );
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));
        Harness {
            ui_tx,
            net_resp_tx,
            net_cmd_rx,
            render_rx,
            handle,
        }
    }

    impl Harness {
        /// Wait for the render state that follows the next processed message
        async fn next_render(&mut self) -> RenderState {
            self.render_rx.recv().await.expect("render state")
        }
    }

    #[tokio::test]
    async fn test_mount_lists_users_and_renders_result() {
        let mut h = spawn_actor();

        let cmd = h.net_cmd_rx.recv().await.unwrap();
        let id = match cmd {
            NetworkCommand::ListUsers { id } => id,
            other => panic!("expected list, got {:?}", other),
        };
        let initial = h.next_render().await;
        assert!(initial.loading);

        h.net_resp_tx
            .send(NetworkResponse::UsersListed { id, users: vec![ann()] })
            .unwrap();
        let state = h.next_render().await;
        assert!(!state.loading);
        assert_eq!(state.users, vec![ann()]);
        assert_eq!(state.error, None);

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
        assert!(matches!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));
    }

    #[tokio::test]
    async fn test_row_delete_button_targets_that_row() {
        let mut h = spawn_actor();
        let id = match h.net_cmd_rx.recv().await.unwrap() {
            NetworkCommand::ListUsers { id } => id,
            other => panic!("expected list, got {:?}", other),
        };
        let _ = h.next_render().await;

        let mut bo = ann();
        bo.id = UserId::from(2);
        bo.name = "Bo".into();
        h.net_resp_tx
            .send(NetworkResponse::UsersListed {
                id,
                users: vec![ann(), bo],
            })
            .unwrap();
        let _ = h.next_render().await;

        h.ui_tx.send(UiEvent::OpenDeleteAt(1)).unwrap();
        let state = h.next_render().await;
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.modal,
            Some(crate::app::ModalView::ConfirmDelete { id: UserId::from(2) })
        );

        h.ui_tx.send(UiEvent::Submit).unwrap();
        match h.net_cmd_rx.recv().await.unwrap() {
            NetworkCommand::DeleteUser { user_id, .. } => assert_eq!(user_id, UserId::from(2)),
            other => panic!("expected delete, got {:?}", other),
        }

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_add_flow_sends_create() {
        let mut h = spawn_actor();
        let _ = h.net_cmd_rx.recv().await;
        let _ = h.next_render().await;

        h.ui_tx.send(UiEvent::OpenAdd).unwrap();
        for field in FormField::ALL {
            let input = match field {
                FormField::Gender => FormInput::NextOption,
                FormField::Age => FormInput::Char('4'),
                _ => FormInput::Char('x'),
            };
            h.ui_tx.send(UiEvent::FormInput(input)).unwrap();
            h.ui_tx.send(UiEvent::NextField).unwrap();
        }
        h.ui_tx.send(UiEvent::Submit).unwrap();

        match h.net_cmd_rx.recv().await.unwrap() {
            NetworkCommand::CreateUser { draft, .. } => {
                assert_eq!(draft.name, "x");
                assert_eq!(draft.age, "4");
                assert_eq!(draft.gender, Some(Gender::Male));
            }
            other => panic!("expected create, got {:?}", other),
        }

        // Drain renders until the submit has been applied
        let mut last = h.next_render().await;
        while last.modal.is_some() || last.toasts.is_empty() {
            last = h.next_render().await;
        }
        assert_eq!(last.toasts[0].level, ToastLevel::Success);

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
    }
}
