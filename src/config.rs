use crate::error::BoardError;

/// Board dimensions; the wrap modulus for both axes.
///
/// Both sides are guaranteed non-zero, so every translation on the board can
/// take a remainder without checking.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct BoardMetric {
    width: u16,
    height: u16,
}

impl BoardMetric {
    /// Creates a board, rejecting a zero-sized side.
    pub fn new(width: u16, height: u16) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::Empty { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn width(self) -> u16 {
        self.width
    }

    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns the total number of cells on the board.
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for BoardMetric {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Default board width in cells.
pub const DEFAULT_BOARD_WIDTH: u16 = 20;

/// Default board height in cells.
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

/// Shortest tick interval accepted from settings.
pub const MIN_TICK_INTERVAL_MS: u64 = 20;

/// Segments grown onto a fresh snake before the first tick.
pub const DEFAULT_INITIAL_GROWTH: usize = 3;

/// Input poll / redraw cadence of the terminal loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

pub const GLYPH_EMPTY: char = '.';
pub const GLYPH_SNAKE: char = 'X';
pub const GLYPH_APPLE: char = 'O';

/// Separator placed between cells of one rendered row.
pub const CELL_SEPARATOR: char = ' ';
