//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::ModalKind;
use crate::form::{FormField, FormInput};
use crate::messages::RenderState;
use crate::ui::list::{ListHit, ListLayout};
use crate::ui::modal::{ModalHit, ModalLayout};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List navigation
    SelectNext,
    SelectPrev,
    /// Select a row by index
    Select(usize),

    // Dialogs
    OpenAdd,
    OpenEdit,
    OpenDelete,
    /// Row buttons: select the row, then open its dialog
    OpenEditAt(usize),
    OpenDeleteAt(usize),
    CloseModal,

    // Form
    NextField,
    PrevField,
    FormInput(FormInput),

    /// Primary button of the open dialog
    Submit,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on what is on screen
pub fn key_to_ui_event(
    key: KeyEvent,
    modal: Option<ModalKind>,
    focused_field: FormField,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            // Ctrl+S submits forms from any field
            KeyCode::Char('s') if modal.is_some() => Some(UiEvent::Submit),
            _ => None,
        };
    }

    match modal {
        None => handle_list_keys(key),
        Some(ModalKind::Add | ModalKind::Edit) => handle_form_keys(key, focused_field),
        Some(ModalKind::ConfirmDelete) => handle_confirm_keys(key),
    }
}

fn handle_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Char('a') => Some(UiEvent::OpenAdd),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::OpenEdit),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::OpenDelete),
        _ => None,
    }
}

fn handle_form_keys(key: KeyEvent, focused_field: FormField) -> Option<UiEvent> {
    let on_select = focused_field == FormField::Gender;
    match key.code {
        KeyCode::Esc => Some(UiEvent::CloseModal),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Backspace => Some(UiEvent::FormInput(FormInput::Backspace)),
        KeyCode::Left if on_select => Some(UiEvent::FormInput(FormInput::PrevOption)),
        KeyCode::Right if on_select => Some(UiEvent::FormInput(FormInput::NextOption)),
        KeyCode::Char(c) => Some(UiEvent::FormInput(FormInput::Char(c))),
        _ => None,
    }
}

fn handle_confirm_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') => Some(UiEvent::CloseModal),
        KeyCode::Enter | KeyCode::Char('y') => Some(UiEvent::Submit),
        _ => None,
    }
}

/// Convert a left click into a UiEvent.
///
/// An open dialog takes every click; otherwise the list buttons and rows do.
pub fn mouse_to_ui_event(mouse: MouseEvent, state: &RenderState, area: Rect) -> Option<UiEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if let Some(kind) = state.modal_kind() {
        return match ModalLayout::compute(area, kind).hit(mouse.column, mouse.row) {
            ModalHit::Backdrop | ModalHit::Close | ModalHit::Cancel => Some(UiEvent::CloseModal),
            ModalHit::Primary => Some(UiEvent::Submit),
            ModalHit::Panel => None,
        };
    }
    match ListLayout::compute(area, state).hit(mouse.column, mouse.row) {
        ListHit::Add => Some(UiEvent::OpenAdd),
        ListHit::Row(index) => Some(UiEvent::Select(index)),
        ListHit::Edit(index) => Some(UiEvent::OpenEditAt(index)),
        ListHit::Delete(index) => Some(UiEvent::OpenDeleteAt(index)),
        ListHit::Nothing => None,
    }
}
