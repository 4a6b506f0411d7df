//! User form rendering

use ratatui::{prelude::*, widgets::*};

use crate::form::FormField;
use crate::models::UserDraft;
use crate::ui::widgets::render_input;

/// Draw the five inputs of `draft` into `area`, one bordered row each
pub fn render_form(f: &mut Frame, area: Rect, draft: &UserDraft, focused: FormField) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 5])
        .split(area);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        let is_focused = *field == focused;
        let value = field.value(draft);

        if *field == FormField::Gender {
            f.render_widget(render_select(value, field.placeholder(), is_focused), *row);
            continue;
        }

        f.render_widget(render_input(value, field.placeholder(), is_focused), *row);

        if is_focused {
            let max_x = row.x.saturating_add(row.width.saturating_sub(2));
            let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
            let cursor_x = row.x.saturating_add(typed).saturating_add(1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, row.y + 1));
        }
    }
}

fn render_select<'a>(value: &'a str, placeholder: &'a str, is_focused: bool) -> Paragraph<'a> {
    let border = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let shown = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };
    let mut spans = vec![shown];
    if is_focused {
        spans.insert(0, Span::styled("◀ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Yellow)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Gender"),
    )
}
