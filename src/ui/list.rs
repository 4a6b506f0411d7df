//! User list screen
//!
//! Like the dialogs, the list is laid out by a [`ListLayout`] that both the
//! renderer and the mouse mapping compute from the terminal area.

use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;
use crate::ui::widgets::{button, gender_color};

const ADD_BUTTON_WIDTH: u16 = 14;
const EDIT_LABEL: &str = "[Edit]";
const DELETE_LABEL: &str = "[Delete]";
/// " [Edit] [Delete]"
const ACTIONS_WIDTH: u16 = 16;

/// What a click on the list screen landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListHit {
    Add,
    /// A data row, by index into the user list
    Row(usize),
    Edit(usize),
    Delete(usize),
    Nothing,
}

/// Screen regions of the list view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListLayout {
    pub title: Rect,
    pub status: Rect,
    /// Bordered table, actions column included
    pub table: Rect,
    /// Data rows of the table, below the header
    pub rows: Rect,
    /// Data rows of the actions column
    pub actions: Rect,
    pub add: Rect,
    pub hints: Rect,
    /// Index of the first visible row
    pub offset: usize,
    pub len: usize,
}

impl ListLayout {
    pub fn compute(area: Rect, state: &RenderState) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(status_height(state)),
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Add button
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let table = chunks[2];
        let inner = Block::bordered().inner(table);
        let actions_width = ACTIONS_WIDTH.min(inner.width);
        let body = Rect {
            y: inner.y.saturating_add(1u16.min(inner.height)),
            height: inner.height.saturating_sub(1),
            ..inner
        };
        let rows = Rect {
            width: inner.width - actions_width,
            ..body
        };
        let actions = Rect {
            x: rows.right(),
            width: actions_width,
            ..body
        };

        let add = Rect {
            width: ADD_BUTTON_WIDTH.min(chunks[3].width.saturating_sub(1)),
            x: chunks[3].x + 1u16.min(chunks[3].width),
            ..chunks[3]
        };

        let len = state.users.len();
        let visible = rows.height as usize;
        // Keep the selected row on screen, scrolling as little as possible
        let offset = if visible > 0 && state.selected >= visible {
            state.selected + 1 - visible
        } else {
            0
        };

        ListLayout {
            title: chunks[0],
            status: chunks[1],
            table,
            rows,
            actions,
            add,
            hints: chunks[4],
            offset,
            len,
        }
    }

    /// Screen rects of the edit and delete buttons on visible row `line`
    fn row_buttons(&self, line: u16) -> (Rect, Rect) {
        let y = self.actions.y + line;
        let edit = Rect::new(self.actions.x + 1, y, EDIT_LABEL.len() as u16, 1);
        let delete = Rect::new(edit.right() + 1, y, DELETE_LABEL.len() as u16, 1);
        (edit.intersection(self.actions), delete.intersection(self.actions))
    }

    /// Classify a click at (`column`, `row`)
    pub fn hit(&self, column: u16, row: u16) -> ListHit {
        if contains(self.add, column, row) {
            return ListHit::Add;
        }
        if row < self.rows.y || row >= self.rows.bottom() {
            return ListHit::Nothing;
        }
        let line = row - self.rows.y;
        let index = self.offset + line as usize;
        if index >= self.len {
            return ListHit::Nothing;
        }

        let (edit, delete) = self.row_buttons(line);
        if contains(edit, column, row) {
            ListHit::Edit(index)
        } else if contains(delete, column, row) {
            ListHit::Delete(index)
        } else if contains(self.rows, column, row) || contains(self.actions, column, row) {
            ListHit::Row(index)
        } else {
            ListHit::Nothing
        }
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
}

/// Draw the list screen filling `area`
pub fn render_list(f: &mut Frame, area: Rect, state: &RenderState) {
    let layout = ListLayout::compute(area, state);

    let title = Paragraph::new(Line::from(" User List ").bold().fg(Color::Cyan));
    f.render_widget(title, layout.title);

    render_status(f, layout.status, state);
    render_table(f, &layout, state);

    f.render_widget(button("Add User", Color::Blue), layout.add);

    let hints = Paragraph::new(" ↑/↓:select | a:add | e:edit | d:delete | q:quit | mouse:click ")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, layout.hints);
}

fn status_height(state: &RenderState) -> u16 {
    state.loading as u16 + state.error.is_some() as u16
}

fn render_status(f: &mut Frame, area: Rect, state: &RenderState) {
    let mut lines = Vec::new();
    if state.loading {
        lines.push(Line::from(vec![
            Span::styled(" ● ● ● ", Style::default().fg(Color::Blue).bold()),
            Span::styled("Loading users...", Style::default().fg(Color::Blue)),
        ]));
    }
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!(" Error: {}", error),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_table(f: &mut Frame, layout: &ListLayout, state: &RenderState) {
    let block = Block::bordered().title(format!(" {} users ", state.users.len()));
    f.render_widget(block, layout.table);

    let header_style = Style::default().fg(Color::Yellow).bold();
    let header = Row::new(["Avatar", "Name", "Surname", "Age", "Gender"]).style(header_style);

    let rows: Vec<Row> = state
        .users
        .iter()
        .map(|u| {
            let gender = u.gender.map(|g| g.as_str()).unwrap_or("");
            Row::new(vec![
                Cell::from(u.avatar_url.as_str()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(u.name.as_str()).style(Style::default().bold()),
                Cell::from(u.surname.as_str()),
                Cell::from(format!("Age: {}", u.age)),
                Cell::from(format!("Gender: {}", gender))
                    .style(Style::default().fg(gender_color(u.gender))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(18),
        Constraint::Percentage(18),
        Constraint::Percentage(12),
        Constraint::Percentage(22),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray).bold())
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_offset(layout.offset);
    if !state.users.is_empty() {
        table_state.select(Some(state.selected));
    }
    // Header row plus the data rows, left of the actions column
    let table_area = Rect {
        y: layout.rows.y.saturating_sub(1),
        height: layout.rows.height + 1,
        ..layout.rows
    };
    f.render_stateful_widget(table, table_area, &mut table_state);

    let actions_header = Rect {
        y: table_area.y,
        height: 1,
        ..layout.actions
    };
    f.render_widget(Paragraph::new(" Actions").style(header_style), actions_header);

    let visible = state
        .users
        .iter()
        .skip(layout.offset)
        .take(layout.actions.height as usize)
        .count();
    let lines: Vec<Line> = (0..visible)
        .map(|_| {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(EDIT_LABEL, Style::default().fg(Color::Blue).bold()),
                Span::raw(" "),
                Span::styled(DELETE_LABEL, Style::default().fg(Color::Red).bold()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), layout.actions);
}
