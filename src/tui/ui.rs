//! Stateless frame rendering.
//!
//! Every frame is rebuilt in full from the current snapshot, so drawing is
//! idempotent and carries no state between renders.

use drop_four::{COLS, Cell, Disc, Grid, ROWS, SessionPhase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Width of one rendered cell, including padding.
const CELL_WIDTH: usize = 4;

/// Renders a complete frame from the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(ROWS as u16 + 2), // Board
            Constraint::Length(3),            // Status
        ])
        .split(area);

    let title = Paragraph::new("Drop Four")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let grid = app.session().grid();
    let aiming = app.session().phase() == SessionPhase::Active;

    let mut lines: Vec<Line> = Vec::with_capacity(ROWS + 2);
    lines.push(cursor_line(app.cursor(), aiming));
    for row in 0..ROWS {
        lines.push(grid_line(grid, row));
    }
    lines.push(footer_line());

    let height = lines.len() as u16;
    let board_area = center_rect(area, (COLS * CELL_WIDTH) as u16, height);
    frame.render_widget(Paragraph::new(lines), board_area);
}

/// Marker row above the grid showing where the next drop lands.
fn cursor_line(cursor: usize, aiming: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(COLS);
    for col in 0..COLS {
        let marker = if aiming && col == cursor { " v  " } else { "    " };
        spans.push(Span::styled(
            marker,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn grid_line(grid: &Grid, row: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(COLS);
    for col in 0..COLS {
        let cell = grid.get(row, col).unwrap_or(Cell::Empty);
        let (symbol, style) = cell_face(cell);
        spans.push(Span::styled(format!(" {}  ", symbol), style));
    }
    Line::from(spans)
}

/// Symbol and style for one cell, derived solely from its occupant.
fn cell_face(cell: Cell) -> (&'static str, Style) {
    match cell {
        Cell::Empty => (".", Style::default().fg(Color::DarkGray)),
        Cell::Taken(Disc::Yellow) => (
            "O",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Taken(Disc::Red) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

/// Column numbers under the grid, matching the 1-7 key bindings.
fn footer_line() -> Line<'static> {
    let mut spans = Vec::with_capacity(COLS);
    for col in 0..COLS {
        spans.push(Span::styled(
            format!(" {}  ", col + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_face_colors_follow_occupant() {
        let (symbol, style) = cell_face(Cell::Empty);
        assert_eq!(symbol, ".");
        assert_eq!(style.fg, Some(Color::DarkGray));

        let (_, yellow) = cell_face(Cell::Taken(Disc::Yellow));
        assert_eq!(yellow.fg, Some(Color::Yellow));

        let (_, red) = cell_face(Cell::Taken(Disc::Red));
        assert_eq!(red.fg, Some(Color::Red));
    }
}
