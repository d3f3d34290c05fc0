use crate::config::BoardMetric;
use crate::geometry::{Direction, Point, translate};

/// One body segment.
///
/// `direction` is the heading that brought the segment to `location`, which
/// can differ from the heading the snake intends to take next.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SnakePart {
    pub direction: Direction,
    pub location: Point,
}

impl SnakePart {
    /// Placeholder returned for the head of a body-less snake.
    pub const INVALID: SnakePart = SnakePart {
        direction: Direction::Invalid,
        location: Point { x: -1, y: -1 },
    };

    #[must_use]
    pub const fn new(direction: Direction, location: Point) -> Self {
        Self {
            direction,
            location,
        }
    }
}

/// Snake body plus the heading the head will take on the next tick.
///
/// `body[0]` is the head; order runs head to tail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    direction: Direction,
    body: Vec<SnakePart>,
}

impl Snake {
    /// Creates a one-segment snake at `start`, heading `direction`.
    #[must_use]
    pub fn new(start: Point, direction: Direction) -> Self {
        Self {
            direction,
            body: vec![SnakePart::new(direction, start)],
        }
    }

    /// Creates a snake from explicit segments (first is head).
    #[must_use]
    pub fn from_parts(body: Vec<SnakePart>, direction: Direction) -> Self {
        Self { direction, body }
    }

    /// Moves every segment one step.
    ///
    /// The head takes the intended heading; every other segment takes the
    /// heading its predecessor had before this step, so it lands on the cell
    /// the predecessor just left.
    #[must_use]
    pub fn slither(&self, board: BoardMetric) -> Self {
        let mut incoming = self.direction;
        let body = self
            .body
            .iter()
            .map(|part| {
                let outgoing = part.direction;
                let moved = SnakePart::new(
                    incoming,
                    translate(part.location, incoming.delta(), board),
                );
                incoming = outgoing;
                moved
            })
            .collect();

        Self {
            direction: self.direction,
            body,
        }
    }

    /// Prepends a new head one step ahead of the current head.
    ///
    /// The step follows the head's own heading, not the intended one.
    #[must_use]
    pub fn grow(&self, board: BoardMetric) -> Self {
        let head = self.head();
        let new_head = SnakePart::new(
            head.direction,
            translate(head.location, head.direction.delta(), board),
        );

        let mut body = Vec::with_capacity(self.body.len() + 1);
        body.push(new_head);
        body.extend_from_slice(&self.body);

        Self {
            direction: self.direction,
            body,
        }
    }

    /// Replaces the intended heading. `Invalid` is ignored.
    ///
    /// Reversal into the body is allowed.
    #[must_use]
    pub fn turn(&self, direction: Direction) -> Self {
        if !direction.is_valid() {
            return self.clone();
        }

        Self {
            direction,
            body: self.body.clone(),
        }
    }

    /// Returns the head segment, or [`SnakePart::INVALID`] for an empty body.
    pub fn head(&self) -> SnakePart {
        self.body.first().copied().unwrap_or(SnakePart::INVALID)
    }

    pub fn head_location(&self) -> Point {
        self.head().location
    }

    /// Returns true if any segment occupies `point`.
    pub fn occupies(&self, point: Point) -> bool {
        self.body.iter().any(|part| part.location == point)
    }

    /// Returns the intended heading for the next tick.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body(&self) -> &[SnakePart] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::BoardMetric;
    use crate::geometry::{Direction, Point, translate};

    use super::{Snake, SnakePart};

    fn board(width: u16, height: u16) -> BoardMetric {
        BoardMetric::new(width, height).expect("test board should be valid")
    }

    #[test]
    fn single_segment_moves_along_intended_heading() {
        let snake = Snake::new(Point::new(5, 5), Direction::East).turn(Direction::North);

        let moved = snake.slither(board(40, 20));

        assert_eq!(moved.head(), SnakePart::new(Direction::North, Point::new(5, 4)));
        assert_eq!(moved.len(), 1);
        assert_eq!(moved.direction(), Direction::North);
    }

    #[test]
    fn head_moves_north_by_translation() {
        let bounds = board(6, 6);
        let snake = Snake::from_parts(
            vec![
                SnakePart::new(Direction::East, Point::new(3, 0)),
                SnakePart::new(Direction::East, Point::new(2, 0)),
            ],
            Direction::North,
        );

        let moved = snake.slither(bounds);

        assert_eq!(
            moved.head_location(),
            translate(Point::new(3, 0), Direction::North.delta(), bounds)
        );
        assert_eq!(moved.head_location(), Point::new(3, 5));
    }

    #[test]
    fn second_segment_steps_into_old_head_cell() {
        let snake = Snake::from_parts(
            vec![
                SnakePart::new(Direction::East, Point::new(4, 4)),
                SnakePart::new(Direction::South, Point::new(3, 4)),
            ],
            Direction::North,
        );

        let moved = snake.slither(board(10, 10));

        assert_eq!(moved.body()[0], SnakePart::new(Direction::North, Point::new(4, 3)));
        assert_eq!(moved.body()[1], SnakePart::new(Direction::East, Point::new(4, 4)));
    }

    #[test]
    fn segments_follow_the_leader_around_a_corner() {
        // Heading east in a straight line, then turning south.
        let bounds = board(10, 10);
        let mut snake = Snake::from_parts(
            vec![
                SnakePart::new(Direction::East, Point::new(3, 1)),
                SnakePart::new(Direction::East, Point::new(2, 1)),
                SnakePart::new(Direction::East, Point::new(1, 1)),
            ],
            Direction::East,
        )
        .turn(Direction::South);

        let mut trail = vec![snake.head_location()];
        for _ in 0..3 {
            snake = snake.slither(bounds);
            trail.push(snake.head_location());
        }

        let locations: Vec<Point> = snake.body().iter().map(|part| part.location).collect();
        assert_eq!(locations, vec![trail[3], trail[2], trail[1]]);
    }

    #[test]
    fn slither_preserves_length() {
        let bounds = board(5, 5);
        let mut snake = Snake::new(Point::new(0, 0), Direction::West);
        for _ in 0..6 {
            snake = snake.grow(bounds);
        }

        for _ in 0..20 {
            let length = snake.len();
            snake = snake.slither(bounds);
            assert_eq!(snake.len(), length);
        }
    }

    #[test]
    fn grow_uses_head_heading_not_intended_heading() {
        let bounds = board(8, 8);
        let snake = Snake::new(Point::new(2, 2), Direction::East).turn(Direction::South);

        let grown = snake.grow(bounds);

        assert_eq!(grown.len(), 2);
        assert_eq!(grown.head(), SnakePart::new(Direction::East, Point::new(3, 2)));
        assert_eq!(grown.body()[1], SnakePart::new(Direction::East, Point::new(2, 2)));
        assert_eq!(grown.direction(), Direction::South);
    }

    #[test]
    fn grow_wraps_around_the_edge() {
        let grown = Snake::new(Point::new(0, 0), Direction::West).grow(board(4, 4));

        assert_eq!(grown.head_location(), Point::new(3, 0));
    }

    #[test]
    fn grow_on_empty_body_synthesizes_a_head_on_the_board() {
        let bounds = board(6, 4);
        let grown = Snake::from_parts(Vec::new(), Direction::North).grow(bounds);

        assert_eq!(grown.len(), 1);
        assert_eq!(grown.head().direction, Direction::Invalid);
        assert_eq!(grown.head_location(), Point::new(5, 3));
        assert!(grown.head_location().is_within(bounds));
    }

    #[test]
    fn empty_snake_reports_placeholder_head() {
        let snake = Snake::from_parts(Vec::new(), Direction::East);

        assert!(snake.is_empty());
        assert_eq!(snake.head(), SnakePart::INVALID);
    }

    #[test]
    fn turn_with_invalid_heading_is_a_no_op() {
        let snake = Snake::from_parts(
            vec![
                SnakePart::new(Direction::West, Point::new(1, 1)),
                SnakePart::new(Direction::North, Point::new(2, 1)),
            ],
            Direction::West,
        );

        assert_eq!(snake.turn(Direction::Invalid), snake);
    }

    #[test]
    fn turn_allows_reversal_and_keeps_body() {
        let snake = Snake::new(Point::new(1, 1), Direction::West)
            .grow(board(5, 5))
            .turn(Direction::East);

        assert_eq!(snake.direction(), Direction::East);
        assert_eq!(snake.len(), 2);
        assert!(snake.occupies(Point::new(0, 1)));
        assert!(snake.occupies(Point::new(1, 1)));
    }
}
