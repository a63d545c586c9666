//! Grid positions and cardinal directions

use std::ops::Add;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Position of a room on the floor grid
///
/// The starting room always sits at [`Position::ORIGIN`]; rows grow downward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The starting room position (0, 0)
    pub const ORIGIN: Position = Position::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this is the starting room position
    pub const fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Check that both coordinates stay within `max_distance` of the origin
    pub const fn within(&self, max_distance: i32) -> bool {
        self.x.abs() <= max_distance && self.y.abs() <= max_distance
    }

    /// The four cardinal neighbours, in [`Direction::ALL`] order
    pub fn neighbours(self) -> [Position; 4] {
        Direction::ALL.map(|dir| self + dir)
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        let (dx, dy) = dir.offset();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction between adjacent rooms (no diagonals)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions for iteration
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Get the unit offset (dx, dy) for this direction
    pub const fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
