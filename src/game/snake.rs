use super::direction::Direction;
use crate::util::Point;
use std::collections::VecDeque;

/// Snake state.
///
/// Segments are cells of the playing field, head first.  While the snake is
/// alive no two segments occupy the same cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells of the snake, with the head at the front
    segments: VecDeque<Point>,

    /// The direction in which the snake is currently travelling
    direction: Direction,
}

impl Snake {
    /// Create a single-segment snake with its head at `head`, facing in
    /// `direction`
    pub(super) fn new(head: Point, direction: Direction) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
            direction,
        }
    }

    pub(super) fn head(&self) -> Point {
        *self
            .segments
            .front()
            .expect("snake should always have at least one segment")
    }

    pub(super) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(super) fn occupies(&self, cell: Point) -> bool {
        self.segments.contains(&cell)
    }

    /// Change the direction of travel.  Input along the current axis of
    /// travel is ignored, so the snake can never reverse into itself in a
    /// single tick.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction.axis() != self.direction.axis() {
            self.direction = direction;
        }
    }

    /// The cell the head would move to on the next tick
    pub(super) fn next_head(&self) -> Point {
        self.direction.advance(self.head())
    }

    pub(super) fn push_head(&mut self, head: Point) {
        self.segments.push_front(head);
    }

    pub(super) fn drop_tail(&mut self) {
        let _ = self.segments.pop_back();
    }
}
