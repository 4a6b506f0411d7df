use ratatui::{prelude::*, widgets::*};

use crate::models::Gender;
use crate::notify::ToastLevel;

/// Renders a bordered single-line input, showing `placeholder` while empty
pub fn render_input<'a>(
    content: &'a str,
    placeholder: &'a str,
    is_focused: bool,
) -> Paragraph<'a> {
    let border = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(placeholder);

    if content.is_empty() {
        Paragraph::new(Span::styled(placeholder, Style::default().fg(Color::DarkGray))).block(block)
    } else {
        Paragraph::new(content).block(block)
    }
}

/// Renders a centered `[ label ]` button; the background fills its area
pub fn button(label: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(format!("[ {} ]", label))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(color).bold())
}

/// Toast border color
pub fn level_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Success => Color::Green,
        ToastLevel::Info => Color::Blue,
        ToastLevel::Warning => Color::Yellow,
    }
}

/// Gender column color
pub fn gender_color(gender: Option<Gender>) -> Color {
    match gender {
        Some(Gender::Male) => Color::Cyan,
        Some(Gender::Female) => Color::Magenta,
        None => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_colors() {
        assert_eq!(gender_color(Some(Gender::Male)), Color::Cyan);
        assert_eq!(gender_color(Some(Gender::Female)), Color::Magenta);
        assert_eq!(gender_color(None), Color::DarkGray);
    }
}
