//! Floor layout system
//!
//! Contains grid positions, rooms and doors, the growth engine, dead-end
//! topology, door placement and text rendering.

mod config;
mod doors;
mod generation;
mod growth;
mod layout;
mod position;
mod render;
mod room;
mod topology;

pub use config::{FloorBuilder, FloorConfig};
pub use doors::place_doors;
pub use generation::Floor;
pub use growth::{GrowthAttempt, grow};
pub use layout::RoomLayout;
pub use position::{Direction, Position};
pub use render::{Symbol, legend, render_layout};
pub use room::{Door, DoorKind, Room, RoomKind};
pub use topology::{dead_ends, pick_boss_room, pick_item_room};
