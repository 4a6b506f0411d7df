//! UI layer - draws a [`RenderState`] snapshot. No state lives here.

pub mod form;
pub mod list;
pub mod modal;
pub mod toast;
pub mod widgets;

use ratatui::Frame;

use crate::messages::RenderState;
use modal::ModalLayout;

/// Draw the whole screen: list, open dialog, then toasts on top
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    list::render_list(f, area, state);

    if let Some(view) = &state.modal {
        let kind = view.kind();
        let layout = ModalLayout::compute(area, kind);
        modal::render_frame(f, &layout, kind);
        match view.draft() {
            Some(draft) => form::render_form(f, layout.body, draft, state.focused_field),
            None => modal::render_confirm_body(f, &layout),
        }
    }

    toast::render_toasts(f, area, &state.toasts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ModalView;
    use crate::form::FormField;
    use crate::models::{Gender, User, UserDraft, UserId};
    use crate::notify::{Toast, ToastLevel};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

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

    #[test]
    fn test_list_shows_rows_and_add_trigger() {
        let state = RenderState {
            users: vec![ann()],
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("User List"));
        assert!(screen.contains("Ann"));
        assert!(screen.contains("Lee"));
        assert!(screen.contains("x.png"));
        assert!(screen.contains("Age: 30"));
        assert!(screen.contains("Gender: Female"));
        assert!(screen.contains("[ Add User ]"));
        assert!(screen.contains("Actions"));
        assert!(screen.contains("[Edit] [Delete]"));
    }

    #[test]
    fn test_loading_and_error_lines() {
        let state = RenderState {
            loading: true,
            error: Some("network down".into()),
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("Loading users..."));
        assert!(screen.contains("Error: network down"));
    }

    #[test]
    fn test_add_modal_shows_placeholders() {
        let state = RenderState {
            modal: Some(ModalView::Add {
                draft: UserDraft::default(),
            }),
            focused_field: FormField::Name,
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("Add New User"));
        assert!(screen.contains("Avatar URL"));
        assert!(screen.contains("Select Gender"));
        assert!(screen.contains("[ Add ]"));
        assert!(screen.contains("×"));
    }

    #[test]
    fn test_delete_modal() {
        let state = RenderState {
            users: vec![ann()],
            modal: Some(ModalView::ConfirmDelete { id: UserId::from(1) }),
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("Delete User"));
        assert!(screen.contains("Are you sure you want to delete this user?"));
        assert!(screen.contains("[ Cancel ]"));
        assert!(screen.contains("[ Delete ]"));
    }

    #[test]
    fn test_toasts_drawn() {
        let state = RenderState {
            toasts: vec![Toast {
                level: ToastLevel::Warning,
                message: "User deleted".into(),
                created_at: chrono::Utc::now(),
            }],
            ..RenderState::default()
        };
        assert!(render(&state).contains("User deleted"));
    }
}
