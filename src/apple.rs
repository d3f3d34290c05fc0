use rand::Rng;

use crate::config::BoardMetric;
use crate::geometry::Point;

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Apple {
    pub position: Point,
}

impl Apple {
    #[must_use]
    pub const fn new(position: Point) -> Self {
        Self { position }
    }

    /// Places an apple anywhere on the board.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: BoardMetric) -> Self {
        Self::new(random_point(rng, board))
    }
}

/// Draws each axis uniformly over the board.
///
/// Cells under the snake are not excluded.
#[must_use]
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, board: BoardMetric) -> Point {
    Point {
        x: rng.gen_range(0..i32::from(board.width())),
        y: rng.gen_range(0..i32::from(board.height())),
    }
}
