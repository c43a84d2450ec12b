use crate::consts;
use crate::util::Point;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The unit step for this direction, in grid cells
    pub(super) fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub(super) fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }

    /// Move `pos` one cell in this direction, wrapping each axis
    /// independently at the window edges
    pub(super) fn advance(self, pos: Point) -> Point {
        let (dx, dy) = self.delta();
        Point {
            x: (pos.x + dx * consts::GRID_SIZE).rem_euclid(consts::SCREEN_WIDTH),
            y: (pos.y + dy * consts::GRID_SIZE).rem_euclid(consts::SCREEN_HEIGHT),
        }
    }
}

/// The axis a direction travels along.  Turn input is ignored unless it is
/// perpendicular to the current axis, which is what rules out a 180°
/// reversal within a single tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Axis {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, Point::new(400, 300), Point::new(400, 280))]
    #[case(Direction::South, Point::new(400, 300), Point::new(400, 320))]
    #[case(Direction::East, Point::new(400, 300), Point::new(420, 300))]
    #[case(Direction::West, Point::new(400, 300), Point::new(380, 300))]
    #[case(Direction::North, Point::new(400, 0), Point::new(400, 580))]
    #[case(Direction::South, Point::new(400, 580), Point::new(400, 0))]
    #[case(Direction::East, Point::new(780, 300), Point::new(0, 300))]
    #[case(Direction::West, Point::new(0, 300), Point::new(780, 300))]
    fn test_advance(#[case] d: Direction, #[case] pos: Point, #[case] r: Point) {
        assert_eq!(d.advance(pos), r);
    }

    #[rstest]
    #[case(Direction::North, Axis::Vertical)]
    #[case(Direction::South, Axis::Vertical)]
    #[case(Direction::East, Axis::Horizontal)]
    #[case(Direction::West, Axis::Horizontal)]
    fn test_axis(#[case] d: Direction, #[case] axis: Axis) {
        assert_eq!(d.axis(), axis);
    }

    #[test]
    fn corner_wraps_one_axis_at_a_time() {
        assert_eq!(
            Direction::West.advance(Point::new(0, 0)),
            Point::new(780, 0)
        );
        assert_eq!(
            Direction::North.advance(Point::new(0, 0)),
            Point::new(0, 580)
        );
    }
}
