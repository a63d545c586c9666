//! Rooms and the doors linking them
//!
//! A room is either regular or special (boss and item rooms). Doors are
//! keyed by the direction they face and point at the neighbouring room's
//! position; a door into or out of a special room is itself special.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::position::{Direction, Position};

/// Room variant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RoomKind {
    /// Ordinary room, entered freely
    #[default]
    Regular,
    /// Boss or item room
    Special,
}

impl RoomKind {
    pub const fn is_special(self) -> bool {
        matches!(self, RoomKind::Special)
    }
}

/// Door variant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum DoorKind {
    /// Always passable
    #[default]
    Regular,
    /// Needs a key to pass
    Special,
}

impl DoorKind {
    /// Door variant for a door between two rooms
    ///
    /// Special if either endpoint is special, so both sides of a doorway
    /// always agree.
    pub const fn between(a: RoomKind, b: RoomKind) -> DoorKind {
        if a.is_special() || b.is_special() {
            DoorKind::Special
        } else {
            DoorKind::Regular
        }
    }

    pub const fn requires_key(self) -> bool {
        matches!(self, DoorKind::Special)
    }
}

/// A door leading to a neighbouring room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door {
    pub kind: DoorKind,
    /// Position of the room on the other side
    pub leads_to: Position,
}

impl Door {
    pub const fn new(kind: DoorKind, leads_to: Position) -> Self {
        Self { kind, leads_to }
    }

    pub const fn requires_key(&self) -> bool {
        self.kind.requires_key()
    }
}

/// A single room on the floor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub kind: RoomKind,
    doors: BTreeMap<Direction, Door>,
}

impl Room {
    pub fn new(kind: RoomKind) -> Self {
        Self {
            kind,
            doors: BTreeMap::new(),
        }
    }

    pub fn regular() -> Self {
        Self::new(RoomKind::Regular)
    }

    pub fn special() -> Self {
        Self::new(RoomKind::Special)
    }

    pub const fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    /// Attach a door on the given side, replacing any door already there
    pub fn add_door(&mut self, dir: Direction, door: Door) {
        self.doors.insert(dir, door);
    }

    /// Door on the given side, if any
    pub fn door(&self, dir: Direction) -> Option<&Door> {
        self.doors.get(&dir)
    }

    /// All doors keyed by the side they are on
    pub fn doors(&self) -> impl Iterator<Item = (Direction, &Door)> {
        self.doors.iter().map(|(dir, door)| (*dir, door))
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }
}
