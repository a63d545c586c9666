//! Insertion-ordered position → room map
//!
//! Iteration order is the order rooms were first placed, which the boss
//! room selection depends on.

use hashbrown::HashMap;

use super::position::Position;
use super::room::Room;

/// Rooms of a floor keyed by grid position, in placement order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomLayout {
    order: Vec<Position>,
    rooms: HashMap<Position, Room>,
}

impl RoomLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            rooms: HashMap::with_capacity(capacity),
        }
    }

    /// Place a room, returning the room previously at `pos`
    ///
    /// Replacing a room keeps the position's original place in the order.
    pub fn insert(&mut self, pos: Position, room: Room) -> Option<Room> {
        let previous = self.rooms.insert(pos, room);
        if previous.is_none() {
            self.order.push(pos);
        }
        previous
    }

    pub fn get(&self, pos: Position) -> Option<&Room> {
        self.rooms.get(&pos)
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Room> {
        self.rooms.get_mut(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.rooms.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Positions in placement order
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.order.iter().copied()
    }

    /// Rooms with their positions, in placement order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Room)> + '_ {
        self.order
            .iter()
            .filter_map(|pos| self.rooms.get(pos).map(|room| (*pos, room)))
    }

    /// Most recently placed position
    pub fn last_position(&self) -> Option<Position> {
        self.order.last().copied()
    }

    /// Count occupied cardinal neighbours of `pos`
    ///
    /// `pos` itself does not need to be occupied.
    pub fn neighbours_amount(&self, pos: Position) -> usize {
        pos.neighbours()
            .into_iter()
            .filter(|neighbour| self.contains(*neighbour))
            .count()
    }
}
