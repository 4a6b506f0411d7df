//! Modal dialog frame: layout, hit testing and chrome.
//!
//! The dialog has no state of its own. Both the renderer and the mouse
//! mapping compute the same [`ModalLayout`] from the terminal area, so a
//! click lands exactly on what was drawn.

use ratatui::{prelude::*, widgets::*};

use crate::app::ModalKind;
use crate::ui::widgets::button;

const FORM_WIDTH: u16 = 54;
/// Five bordered inputs, a spacer, the button row and the border
const FORM_HEIGHT: u16 = 5 * 3 + 2 + 2;
const CONFIRM_WIDTH: u16 = 50;
const CONFIRM_HEIGHT: u16 = 7;

const CLOSE_GLYPH: &str = " × ";
const CANCEL_LABEL: &str = "Cancel";

/// What a click inside the terminal landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalHit {
    /// Dimmed area around the panel
    Backdrop,
    Close,
    Primary,
    Cancel,
    /// Anywhere else on the panel
    Panel,
}

/// Screen regions of an open dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalLayout {
    pub panel: Rect,
    pub close: Rect,
    pub body: Rect,
    pub primary: Rect,
    pub cancel: Option<Rect>,
}

/// Rect of `width` x `height` centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
}

fn label_width(label: &str) -> u16 {
    // "[ label ]"
    label.chars().count() as u16 + 4
}

impl ModalLayout {
    pub fn compute(area: Rect, kind: ModalKind) -> Self {
        let (width, height) = if kind.has_form() {
            (FORM_WIDTH, FORM_HEIGHT)
        } else {
            (CONFIRM_WIDTH, CONFIRM_HEIGHT)
        };
        let panel = centered_rect(width, height, area);

        let close = Rect {
            x: panel.right().saturating_sub(4).max(panel.x),
            y: panel.y,
            width: 3u16.min(panel.width),
            height: 1u16.min(panel.height),
        };

        // Inside the border, one column of padding left and right
        let inner = Rect {
            x: panel.x + 2u16.min(panel.width),
            y: panel.y + 1u16.min(panel.height),
            width: panel.width.saturating_sub(4),
            height: panel.height.saturating_sub(2),
        };
        let button_row = inner.bottom().saturating_sub(1).max(inner.y);
        let body = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };

        let (primary, cancel) = if kind.has_form() {
            let primary = Rect {
                x: inner.x,
                y: button_row,
                width: inner.width,
                height: 1u16.min(inner.height),
            };
            (primary, None)
        } else {
            let delete_w = label_width(kind.primary_label()).min(inner.width);
            let cancel_w = label_width(CANCEL_LABEL);
            let primary = Rect {
                x: inner.right().saturating_sub(delete_w),
                y: button_row,
                width: delete_w,
                height: 1u16.min(inner.height),
            };
            let cancel_x = primary.x.saturating_sub(cancel_w + 2).max(inner.x);
            let cancel = Rect {
                x: cancel_x,
                y: button_row,
                width: primary.x.saturating_sub(cancel_x).min(cancel_w),
                height: primary.height,
            };
            (primary, Some(cancel))
        };

        ModalLayout {
            panel,
            close,
            body,
            primary,
            cancel,
        }
    }

    /// Classify a click at (`column`, `row`)
    pub fn hit(&self, column: u16, row: u16) -> ModalHit {
        if contains(self.close, column, row) {
            ModalHit::Close
        } else if contains(self.primary, column, row) {
            ModalHit::Primary
        } else if self.cancel.is_some_and(|r| contains(r, column, row)) {
            ModalHit::Cancel
        } else if contains(self.panel, column, row) {
            ModalHit::Panel
        } else {
            ModalHit::Backdrop
        }
    }
}

fn primary_color(kind: ModalKind) -> Color {
    match kind {
        ModalKind::Add => Color::Green,
        ModalKind::Edit => Color::Blue,
        ModalKind::ConfirmDelete => Color::Red,
    }
}

/// Dim the screen and draw the dialog frame with its buttons.
///
/// The caller fills `layout.body`.
pub fn render_frame(f: &mut Frame, layout: &ModalLayout, kind: ModalKind) {
    let area = f.area();
    f.buffer_mut().set_style(
        area,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title_top(Line::from(format!(" {} ", kind.title())).bold())
        .title_top(Line::from(CLOSE_GLYPH).right_aligned())
        .style(Style::default().bg(Color::Black).fg(Color::White));

    f.render_widget(Clear, layout.panel);
    f.render_widget(block, layout.panel);

    let primary = button(kind.primary_label(), primary_color(kind));
    f.render_widget(primary, layout.primary);

    if let Some(cancel) = layout.cancel {
        f.render_widget(button(CANCEL_LABEL, Color::Gray), cancel);
    }
}

/// Body of the delete confirmation dialog
pub fn render_confirm_body(f: &mut Frame, layout: &ModalLayout) {
    let text = Paragraph::new("Are you sure you want to delete this user?")
        .wrap(Wrap { trim: true });
    f.render_widget(text, layout.body);
}
