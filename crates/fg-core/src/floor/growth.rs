//! Randomized breadth-first room growth
//!
//! Grows a tree of rooms outward from the starting room. Each attempt runs
//! in its own [`GrowthAttempt`] and may stop short of the target count; the
//! caller decides whether to keep or discard the result.

use std::collections::VecDeque;

use crate::grid_capacity;
use crate::rng::FloorRng;

use super::layout::RoomLayout;
use super::position::{Direction, Position};
use super::room::Room;

/// State of a single growth attempt
///
/// Created fresh per attempt so nothing leaks between retries.
#[derive(Debug)]
pub struct GrowthAttempt {
    layout: RoomLayout,
    generated: usize,
    queue: VecDeque<Position>,
    target: usize,
    max_distance: i32,
}

impl GrowthAttempt {
    /// Start an attempt with only the starting room placed
    pub fn new(target: usize, max_distance: i32) -> Self {
        let mut layout = RoomLayout::with_capacity(target.min(grid_capacity(max_distance)));
        let mut queue = VecDeque::new();
        layout.insert(Position::ORIGIN, Room::regular());
        queue.push_back(Position::ORIGIN);
        Self {
            layout,
            generated: 1,
            queue,
            target,
            max_distance,
        }
    }

    /// Number of rooms placed so far
    pub fn generated(&self) -> usize {
        self.generated
    }

    /// Check whether a room may be placed at `spot`
    ///
    /// The coin is flipped after the occupancy, count and neighbour checks
    /// but before the bounds check, so an out-of-grid spot still consumes
    /// a draw.
    fn accepts(&self, spot: Position, rng: &mut FloorRng) -> bool {
        !self.layout.contains(spot)
            && self.generated < self.target
            && self.layout.neighbours_amount(spot) < 2
            && rng.coin_flip()
            && spot.within(self.max_distance)
    }

    /// Expand one queued room, returning false once the queue is empty
    pub fn step(&mut self, rng: &mut FloorRng) -> bool {
        let Some(current) = self.queue.pop_front() else {
            return false;
        };

        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        for dir in directions {
            let spot = current + dir;
            if self.accepts(spot, rng) {
                self.layout.insert(spot, Room::regular());
                self.queue.push_back(spot);
                self.generated += 1;
            }
        }
        true
    }

    /// Expand until the queue runs dry
    pub fn run(mut self, rng: &mut FloorRng) -> RoomLayout {
        while self.step(rng) {}
        self.layout
    }
}

/// Run one growth attempt towards `target` rooms
///
/// The result holds between 1 and `target` rooms, all connected to the
/// origin and within `max_distance` on both axes.
pub fn grow(target: usize, max_distance: i32, rng: &mut FloorRng) -> RoomLayout {
    GrowthAttempt::new(target, max_distance).run(rng)
}
