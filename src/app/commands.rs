//! Command handlers - business logic for processing UI events

use chrono::{DateTime, Utc};

use crate::app::state::{ModalKind, ModalView};
use crate::app::AppState;
use crate::constants::{MSG_USER_ADDED, MSG_USER_DELETED, MSG_USER_UPDATED};
use crate::form::{self, FormField, FormInput};
use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::models::UserDraft;
use crate::notify::ToastLevel;
use crate::store::Action;

impl AppState {
    // ========================
    // Lifecycle
    // ========================

    /// Request the user list the first time the view comes up
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.store.dispatch(Action::ListPending);
        Some(NetworkCommand::ListUsers { id: self.next_id() })
    }

    /// Expire old toasts, returns true if the screen needs a redraw
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.toasts.prune(now)
    }

    // ========================
    // List navigation
    // ========================

    pub fn select_next(&mut self) {
        let len = self.users().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the cursor to `index`, ignored past the last row
    pub fn select(&mut self, index: usize) {
        if index < self.users().len() {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.users().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // ========================
    // Dialogs
    // ========================

    pub fn open_add(&mut self) {
        self.modal = Some(ModalView::Add {
            draft: UserDraft::default(),
        });
        self.focused_field = FormField::default();
    }

    pub fn open_edit(&mut self) {
        if let Some(user) = self.selected_user() {
            let view = ModalView::Edit {
                id: user.id.clone(),
                draft: user.to_draft(),
            };
            self.modal = Some(view);
            self.focused_field = FormField::default();
        }
    }

    pub fn open_delete(&mut self) {
        if let Some(user) = self.selected_user() {
            self.modal = Some(ModalView::ConfirmDelete {
                id: user.id.clone(),
            });
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // ========================
    // Form
    // ========================

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn edit_form(&mut self, input: FormInput) {
        let field = self.focused_field;
        if let Some(draft) = self.modal.as_mut().and_then(ModalView::draft_mut) {
            *draft = form::apply(draft, field, input);
        }
    }

    // ========================
    // Submission
    // ========================

    /// Submit whichever dialog is open
    pub fn submit(&mut self) -> Option<NetworkCommand> {
        match self.modal.as_ref().map(ModalView::kind) {
            Some(ModalKind::Add) => self.submit_add(),
            Some(ModalKind::Edit) => self.submit_update(),
            Some(ModalKind::ConfirmDelete) => self.confirm_delete(),
            None => None,
        }
    }

    /// Create a user from the add draft.
    ///
    /// The toast is shown even when the draft is incomplete and nothing is sent.
    pub fn submit_add(&mut self) -> Option<NetworkCommand> {
        let mut cmd = None;
        if let Some(ModalView::Add { draft }) = &self.modal {
            if draft.is_complete() {
                let draft = draft.clone();
                cmd = Some(NetworkCommand::CreateUser {
                    id: self.next_id(),
                    draft,
                });
                self.modal = None;
            }
        }
        self.toasts.push(ToastLevel::Success, MSG_USER_ADDED);
        cmd
    }

    /// Send the edit draft. Toast shown unconditionally, like `submit_add`.
    pub fn submit_update(&mut self) -> Option<NetworkCommand> {
        let mut cmd = None;
        if let Some(ModalView::Edit { id, draft }) = &self.modal {
            if draft.is_complete() {
                let (user_id, draft) = (id.clone(), draft.clone());
                cmd = Some(NetworkCommand::UpdateUser {
                    id: self.next_id(),
                    user_id,
                    draft,
                });
                self.modal = None;
            }
        }
        self.toasts.push(ToastLevel::Info, MSG_USER_UPDATED);
        cmd
    }

    pub fn confirm_delete(&mut self) -> Option<NetworkCommand> {
        let mut cmd = None;
        if let Some(ModalView::ConfirmDelete { id }) = &self.modal {
            let user_id = id.clone();
            cmd = Some(NetworkCommand::DeleteUser {
                id: self.next_id(),
                user_id,
            });
            self.modal = None;
        }
        self.toasts.push(ToastLevel::Warning, MSG_USER_DELETED);
        cmd
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        tracing::debug!(
            id = response.id(),
            failed = response.is_failure(),
            "Network response received"
        );
        let action = match response {
            NetworkResponse::UsersListed { users, .. } => Action::ListFulfilled(users),
            NetworkResponse::UserCreated { user, .. } => Action::CreateFulfilled(user),
            NetworkResponse::UserUpdated { user, .. } => Action::UpdateFulfilled(user),
            NetworkResponse::UserDeleted { user_id, .. } => Action::DeleteFulfilled(user_id),
            NetworkResponse::Failed {
                id,
                operation,
                message,
            } => {
                tracing::warn!(id, operation = operation.as_str(), %message, "Remote operation failed");
                match operation {
                    Operation::List => Action::ListRejected(message),
                    Operation::Create => Action::CreateRejected(message),
                    Operation::Update => Action::UpdateRejected(message),
                    Operation::Delete => Action::DeleteRejected(message),
                }
            }
        };
        self.store.dispatch(action);
        self.clamp_selection();
    }
}
