//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::{ModalKind, ModalView};
use crate::form::FormField;
use crate::models::User;
use crate::notify::Toast;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Users
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,

    // List view
    pub selected: usize,

    // Dialog
    pub modal: Option<ModalView>,
    pub focused_field: FormField,

    // Notifications
    pub toasts: Vec<Toast>,
}

impl RenderState {
    pub fn modal_kind(&self) -> Option<ModalKind> {
        self.modal.as_ref().map(ModalView::kind)
    }
}
