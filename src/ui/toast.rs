//! Toast stack in the top-right corner

use ratatui::{prelude::*, widgets::*};

use crate::notify::Toast;
use crate::ui::widgets::level_color;

const TOAST_WIDTH: u16 = 32;
const TOAST_HEIGHT: u16 = 3;

/// Stack `toasts` downward from the top-right corner, oldest first
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast]) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1).max(area.x);

    for (i, toast) in toasts.iter().enumerate() {
        let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let color = level_color(toast.level);

        let line = Line::from(vec![
            Span::styled(format!(" {} ", toast.level.icon()), Style::default().fg(color).bold()),
            Span::raw(toast.message.as_str()),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );

        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}
