//! App state - pure data structure with no I/O logic

use chrono::Duration;

use crate::form::FormField;
use crate::messages::RenderState;
use crate::models::{User, UserDraft, UserId};
use crate::notify::Toasts;
use crate::store::Store;

/// Which dialog is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Add,
    Edit,
    ConfirmDelete,
}

impl ModalKind {
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::Add => "Add New User",
            ModalKind::Edit => "Edit User",
            ModalKind::ConfirmDelete => "Delete User",
        }
    }

    /// Label of the button that submits the dialog
    pub fn primary_label(&self) -> &'static str {
        match self {
            ModalKind::Add => "Add",
            ModalKind::Edit => "Update",
            ModalKind::ConfirmDelete => "Delete",
        }
    }

    pub fn has_form(&self) -> bool {
        matches!(self, ModalKind::Add | ModalKind::Edit)
    }
}

/// The open dialog together with the transient data it owns.
///
/// Closing the dialog drops the draft or pending id with it.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalView {
    Add { draft: UserDraft },
    Edit { id: UserId, draft: UserDraft },
    ConfirmDelete { id: UserId },
}

impl ModalView {
    pub fn kind(&self) -> ModalKind {
        match self {
            ModalView::Add { .. } => ModalKind::Add,
            ModalView::Edit { .. } => ModalKind::Edit,
            ModalView::ConfirmDelete { .. } => ModalKind::ConfirmDelete,
        }
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            ModalView::Add { draft } | ModalView::Edit { draft, .. } => Some(draft),
            ModalView::ConfirmDelete { .. } => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        match self {
            ModalView::Add { draft } | ModalView::Edit { draft, .. } => Some(draft),
            ModalView::ConfirmDelete { .. } => None,
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Users mirrored from the remote store
    pub store: Store,

    // List view
    pub selected: usize,
    pub mounted: bool,

    // Dialog + form
    pub modal: Option<ModalView>,
    pub focused_field: FormField,

    // Notifications
    pub toasts: Toasts,

    pub next_request_id: u64,
}

impl AppState {
    pub fn new(toast_ttl: Duration) -> Self {
        AppState {
            store: Store::new(),
            selected: 0,
            mounted: false,
            modal: None,
            focused_field: FormField::default(),
            toasts: Toasts::new(toast_ttl),
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn users(&self) -> &[User] {
        &self.store.state().users
    }

    /// The record under the list cursor
    pub fn selected_user(&self) -> Option<&User> {
        self.users().get(self.selected)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let users = self.store.state();
        RenderState {
            users: users.users.clone(),
            loading: users.loading,
            error: users.error.clone(),
            selected: self.selected,
            modal: self.modal.clone(),
            focused_field: self.focused_field,
            toasts: self.toasts.items().to_vec(),
        }
    }
}
