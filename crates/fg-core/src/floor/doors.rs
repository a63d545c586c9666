//! Door placement between adjacent rooms

use super::layout::RoomLayout;
use super::position::{Direction, Position};
use super::room::{Door, DoorKind};

/// Place a door on every side of every room that faces another room
///
/// Runs over the finished layout; each side is decided on its own, using
/// [`DoorKind::between`] so the two halves of a doorway always match.
pub fn place_doors(layout: &mut RoomLayout) {
    let mut doors: Vec<(Position, Direction, Door)> = Vec::new();

    for (pos, room) in layout.iter() {
        for dir in Direction::ALL {
            let spot = pos + dir;
            if let Some(neighbour) = layout.get(spot) {
                let kind = DoorKind::between(room.kind, neighbour.kind);
                doors.push((pos, dir, Door::new(kind, spot)));
            }
        }
    }

    for (pos, dir, door) in doors {
        if let Some(room) = layout.get_mut(pos) {
            room.add_door(dir, door);
        }
    }
}
