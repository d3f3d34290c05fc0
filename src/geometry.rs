use rand::Rng;

use crate::config::BoardMetric;

/// Cell coordinate on the board.
///
/// Points produced by [`translate`] always satisfy `0 <= x < width` and
/// `0 <= y < height`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the point lies inside the board.
    pub fn is_within(self, board: BoardMetric) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(board.width())
            && self.y < i32::from(board.height())
    }
}

/// One-step displacement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

/// Heading of a segment or of the snake.
///
/// `Invalid` means "no heading" and maps to a zero displacement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Invalid,
}

impl Direction {
    /// Headings a snake can actually travel along.
    pub const MOVING: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Returns the displacement for one step along this heading.
    pub fn delta(self) -> Delta {
        let (dx, dy) = match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::Invalid => (0, 0),
        };
        Delta { dx, dy }
    }

    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }

    /// Picks one of the four moving headings uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::MOVING[rng.gen_range(0..Self::MOVING.len())]
    }
}

/// Moves `point` by `delta`, wrapping around both edges of the board.
#[must_use]
pub fn translate(point: Point, delta: Delta, board: BoardMetric) -> Point {
    Point {
        x: wrap_axis(i64::from(point.x) + i64::from(delta.dx), board.width()),
        y: wrap_axis(i64::from(point.y) + i64::from(delta.dy), board.height()),
    }
}

fn wrap_axis(value: i64, upper_bound: u16) -> i32 {
    // The remainder is below `upper_bound`, so it always fits an i32.
    value.rem_euclid(i64::from(upper_bound)) as i32
}
