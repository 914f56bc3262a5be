//! Screen geometry and click hit-testing.
//!
//! Rendering and mouse handling both derive rectangles from the same
//! [`ScreenLayout::compute`], so a click always lands on what was drawn.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};
use tracing::instrument;

use crate::games::tictactoe::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board grid size without the surrounding border.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board grid size without the surrounding border.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
/// Longest possible move list: the start plus nine plies.
pub const MOVE_LINES: u16 = 10;
/// Info panel height that shows every move-list line, borders included.
pub const INFO_HEIGHT: u16 = MOVE_LINES + 4 + 2;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A board square.
    Square(Position),
    /// A line of the move list, counted from the top of the list.
    MoveLine(usize),
    /// The move-list order toggle.
    ReverseToggle,
}

/// Rectangles of every interactive region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board panel.
    pub board: Rect,
    /// Grid inside the board panel.
    pub grid: Rect,
    /// Each square, in index order.
    pub cells: [Rect; 9],
    /// Bordered game info panel.
    pub info: Rect,
    /// Status line.
    pub status: Rect,
    /// Order toggle line.
    pub toggle: Rect,
    /// Move list, one entry per line.
    pub moves: Rect,
    /// Key help at the bottom.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into panels.
    #[instrument]
    pub fn compute(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(INFO_HEIGHT.max(GRID_HEIGHT + 2)),
                Constraint::Length(1), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(GRID_WIDTH + 2),
                Constraint::Length(2),
                Constraint::Min(20),
            ])
            .split(outer[1]);

        let board = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(GRID_HEIGHT + 2), Constraint::Min(0)])
            .split(body[0])[0];
        let grid = Block::default().borders(Borders::ALL).inner(board);

        let info = body[2];
        let info_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status
                Constraint::Length(1),
                Constraint::Length(1), // Toggle
                Constraint::Length(1),
                Constraint::Min(0), // Moves
            ])
            .split(Block::default().borders(Borders::ALL).inner(info));

        Self {
            title: outer[0],
            board,
            grid,
            cells: cell_rects(grid),
            info,
            status: info_rows[0],
            toggle: info_rows[2],
            moves: info_rows[4],
            help: outer[2],
        }
    }

    /// Finds the interactive region under a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        if let Some(index) = self.cells.iter().position(|r| contains(*r, column, row)) {
            return Position::from_index(index).map(HitTarget::Square);
        }
        if contains(self.toggle, column, row) {
            return Some(HitTarget::ReverseToggle);
        }
        if contains(self.moves, column, row) {
            return Some(HitTarget::MoveLine(usize::from(row - self.moves.y)));
        }
        None
    }
}

fn cell_rects(grid: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        let col = u16::from(pos.column() - 1);
        let row = u16::from(pos.row() - 1);
        let x = grid.x + col * (CELL_WIDTH + 1);
        let y = grid.y + row * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid)
    })
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
