//! Floor generation
//!
//! Repeats growth attempts until one reaches the exact room count with
//! enough dead ends for every special room, then picks the boss and item
//! rooms and places doors. Acceptance is probabilistic, so the number of
//! attempts is unbounded in principle; [`FloorConfig::max_attempts`] caps
//! it unless the caller opts out.

use log::{debug, info, trace, warn};

use crate::SPECIAL_ROOMS_AMOUNT;
use crate::error::FloorError;
use crate::rng::FloorRng;

use super::config::FloorConfig;
use super::doors::place_doors;
use super::growth::grow;
use super::layout::RoomLayout;
use super::position::Position;
use super::room::Room;
use super::topology::{dead_ends, pick_boss_room, pick_item_room};

/// A generated floor: rooms on a square grid with a start, boss and item room
///
/// Immutable once generated; the room map is only handed out by reference.
#[derive(Debug, Clone)]
pub struct Floor {
    rooms_map: RoomLayout,
    boss_room_pos: Position,
    item_room_pos: Position,
    dead_ends: Vec<Position>,
    config: FloorConfig,
    generated_rooms: usize,
    attempts: u32,
    seed: u64,
}

impl Floor {
    /// Generate a floor with the given number of rooms and a random seed
    pub fn new(rooms: usize) -> Result<Self, FloorError> {
        let mut rng = FloorRng::from_entropy();
        Self::generate(FloorConfig::with_rooms(rooms), &mut rng)
    }

    /// Generate a reproducible floor from a seed
    pub fn with_seed(rooms: usize, seed: u64) -> Result<Self, FloorError> {
        let config = FloorConfig {
            seed: Some(seed),
            ..FloorConfig::with_rooms(rooms)
        };
        let mut rng = config.rng();
        Self::generate(config, &mut rng)
    }

    /// Generate a floor from a configuration, drawing from `rng`
    ///
    /// The configuration is validated before any growth happens. The
    /// config's own seed is ignored here; the caller owns the RNG.
    pub fn generate(config: FloorConfig, rng: &mut FloorRng) -> Result<Self, FloorError> {
        config.validate()?;

        let mut attempts: u32 = 0;
        loop {
            if let Some(limit) = config.max_attempts
                && attempts >= limit
            {
                warn!(
                    "Gave up on a {}-room floor after {} attempts",
                    config.rooms, attempts
                );
                return Err(FloorError::GenerationFailed {
                    attempts,
                    rooms: config.rooms,
                });
            }
            attempts += 1;

            let mut layout = grow(config.rooms, config.max_distance, rng);
            let ends = dead_ends(&layout);
            if layout.len() != config.rooms || ends.len() < SPECIAL_ROOMS_AMOUNT {
                trace!(
                    "Attempt {}: rejected ({} rooms, {} dead ends)",
                    attempts,
                    layout.len(),
                    ends.len()
                );
                continue;
            }

            let mut candidates = ends.clone();
            if let Some(boss_room_pos) = pick_boss_room(&layout, &mut candidates)
                && let Some(item_room_pos) = pick_item_room(&mut candidates, rng)
            {
                debug!("Boss room at {boss_room_pos}, item room at {item_room_pos}");
                layout.insert(boss_room_pos, Room::special());
                layout.insert(item_room_pos, Room::special());
                place_doors(&mut layout);

                info!(
                    "Generated {}-room floor in {} attempt(s)",
                    config.rooms, attempts
                );
                return Ok(Self {
                    generated_rooms: layout.len(),
                    rooms_map: layout,
                    boss_room_pos,
                    item_room_pos,
                    dead_ends: ends,
                    config,
                    attempts,
                    seed: rng.seed(),
                });
            }
        }
    }

    /// The rooms keyed by position, in placement order
    pub fn rooms_map(&self) -> &RoomLayout {
        &self.rooms_map
    }

    pub fn room(&self, pos: Position) -> Option<&Room> {
        self.rooms_map.get(pos)
    }

    pub fn start_pos(&self) -> Position {
        Position::ORIGIN
    }

    pub fn boss_room_pos(&self) -> Position {
        self.boss_room_pos
    }

    pub fn item_room_pos(&self) -> Position {
        self.item_room_pos
    }

    /// Requested room count
    pub fn rooms_amount(&self) -> usize {
        self.config.rooms
    }

    /// Rooms reached by the accepted growth attempt
    pub fn generated_rooms(&self) -> usize {
        self.generated_rooms
    }

    /// Growth attempts it took, including the accepted one
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Dead ends of the accepted layout, before boss and item selection
    pub fn dead_ends(&self) -> &[Position] {
        &self.dead_ends
    }

    pub fn max_distance(&self) -> i32 {
        self.config.max_distance
    }

    pub fn config(&self) -> &FloorConfig {
        &self.config
    }

    /// Seed of the RNG the floor was drawn from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
