//! Dead-end detection and special room selection

use crate::rng::FloorRng;

use super::layout::RoomLayout;
use super::position::Position;

/// Find all dead ends, in placement order
///
/// A dead end is a room with exactly one neighbour. The starting room is
/// never a dead end.
pub fn dead_ends(layout: &RoomLayout) -> Vec<Position> {
    layout
        .positions()
        .filter(|pos| !pos.is_origin() && layout.neighbours_amount(*pos) == 1)
        .collect()
}

/// Pick the boss room: the last room placed during growth
///
/// The pick is removed from `dead_ends` whether or not it was one.
pub fn pick_boss_room(layout: &RoomLayout, dead_ends: &mut Vec<Position>) -> Option<Position> {
    let last = layout.last_position()?;
    dead_ends.retain(|pos| *pos != last);
    Some(last)
}

/// Pick the item room uniformly from the remaining dead ends and remove it
pub fn pick_item_room(dead_ends: &mut Vec<Position>, rng: &mut FloorRng) -> Option<Position> {
    let idx = rng.choose_index(dead_ends.len())?;
    Some(dead_ends.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::room::Room;

    /// Layout shaped like:
    ///
    /// ```text
    /// [ ][C][ ]
    /// [A][S][B]
    /// ```
    fn fork_layout() -> RoomLayout {
        let mut layout = RoomLayout::new();
        layout.insert(Position::ORIGIN, Room::regular());
        layout.insert(Position::new(-1, 0), Room::regular());
        layout.insert(Position::new(1, 0), Room::regular());
        layout.insert(Position::new(0, -1), Room::regular());
        layout
    }

    #[test]
    fn test_dead_ends_exclude_origin() {
        let mut layout = RoomLayout::new();
        layout.insert(Position::ORIGIN, Room::regular());
        layout.insert(Position::new(1, 0), Room::regular());
        // Origin has a single neighbour but is not a dead end
        assert_eq!(dead_ends(&layout), vec![Position::new(1, 0)]);
    }

    #[test]
    fn test_dead_ends_in_placement_order() {
        let layout = fork_layout();
        assert_eq!(
            dead_ends(&layout),
            vec![Position::new(-1, 0), Position::new(1, 0), Position::new(0, -1)]
        );
    }

    #[test]
    fn test_corridor_middle_is_not_dead_end() {
        let mut layout = RoomLayout::new();
        layout.insert(Position::ORIGIN, Room::regular());
        layout.insert(Position::new(0, 1), Room::regular());
        layout.insert(Position::new(0, 2), Room::regular());
        assert_eq!(dead_ends(&layout), vec![Position::new(0, 2)]);
    }

    #[test]
    fn test_boss_is_last_placed() {
        let layout = fork_layout();
        let mut ends = dead_ends(&layout);
        let boss = pick_boss_room(&layout, &mut ends);
        assert_eq!(boss, Some(Position::new(0, -1)));
        assert_eq!(ends, vec![Position::new(-1, 0), Position::new(1, 0)]);
    }

    #[test]
    fn test_boss_not_a_dead_end_leaves_list_alone() {
        let mut layout = RoomLayout::new();
        layout.insert(Position::ORIGIN, Room::regular());
        layout.insert(Position::new(1, 0), Room::regular());
        let mut ends = vec![Position::new(5, 5)];
        assert_eq!(pick_boss_room(&layout, &mut ends), Some(Position::new(1, 0)));
        assert_eq!(ends, vec![Position::new(5, 5)]);
    }

    #[test]
    fn test_boss_on_empty_layout() {
        let mut ends = Vec::new();
        assert_eq!(pick_boss_room(&RoomLayout::new(), &mut ends), None);
    }

    #[test]
    fn test_item_room_removed_from_candidates() {
        let mut rng = FloorRng::new(11);
        let mut ends = vec![Position::new(-1, 0), Position::new(1, 0)];
        let item = pick_item_room(&mut ends, &mut rng).unwrap();
        assert_eq!(ends.len(), 1);
        assert!(!ends.contains(&item));
    }

    #[test]
    fn test_item_room_single_candidate() {
        let mut rng = FloorRng::new(0);
        let mut ends = vec![Position::new(0, 1)];
        assert_eq!(pick_item_room(&mut ends, &mut rng), Some(Position::new(0, 1)));
        assert!(ends.is_empty());
        assert_eq!(pick_item_room(&mut ends, &mut rng), None);
    }
}
