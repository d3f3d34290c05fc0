use std::fmt;

use crate::config::{CELL_SEPARATOR, GLYPH_APPLE, GLYPH_EMPTY, GLYPH_SNAKE};
use crate::game::GameState;
use crate::geometry::Point;

/// Marker for one board cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Snake,
    Apple,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => GLYPH_EMPTY,
            Self::Snake => GLYPH_SNAKE,
            Self::Apple => GLYPH_APPLE,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Renderable snapshot: `height` rows of `width` cells, indexed `[y][x]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an all-empty grid. Every row is its own allocation.
    #[must_use]
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            rows: (0..height).map(|_| vec![Cell::Empty; width]).collect(),
        }
    }

    /// Returns the cell at `point`, or `None` off the grid.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    fn set(&mut self, point: Point, cell: Cell) {
        let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
            return;
        };
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Counts the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.rows.iter().flatten().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, "{CELL_SEPARATOR}")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Projects the game into a grid.
///
/// The apple wins over a snake segment on the same cell, so an apple that
/// spawned under the body stays visible.
#[must_use]
pub fn to_grid(state: &GameState) -> Grid {
    let board = state.board();
    let mut grid = Grid::empty(usize::from(board.width()), usize::from(board.height()));

    for part in state.snake.body() {
        grid.set(part.location, Cell::Snake);
    }
    grid.set(state.apple_position(), Cell::Apple);

    grid
}

/// Joins cells with a single space and rows with a newline.
#[must_use]
pub fn render_as_string(grid: &Grid) -> String {
    grid.to_string()
}
