use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbor one cell away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Snake body and direction state.
///
/// The body is head-first; `pending_direction` holds the most recent input
/// candidate, which only takes effect through [`Snake::apply_pending`] at the
/// start of a tick.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a snake with `length` segments, head at `head`, body laid out
    /// opposite to `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        debug_assert!(length >= 1);

        let mut body = VecDeque::with_capacity(length);
        let mut segment = head;
        for _ in 0..length {
            body.push_back(segment);
            segment = segment.step(direction.opposite());
        }

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Stores the next direction candidate.
    ///
    /// The value is not validated here; reversals are rejected when the
    /// candidate is applied at tick time, against the direction in effect
    /// at that tick.
    pub fn set_pending(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    /// Applies the pending direction unless it reverses the current one.
    ///
    /// A rejected reversal is silently ignored and the pending value is left
    /// in place.
    pub fn apply_pending(&mut self) {
        if self.pending_direction != self.direction.opposite() {
            self.direction = self.pending_direction;
        }
    }

    /// Returns the head position for the next movement step.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Moves the head to `next_head`; keeps the tail when `grow`.
    pub fn advance(&mut self, next_head: Position, grow: bool) {
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    ///
    /// The tail counts even when it is about to be vacated on the next
    /// advance; collision checks run against the full body.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
