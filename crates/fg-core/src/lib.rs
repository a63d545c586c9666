//! fg-core: Floor layout generation for a grid-based dungeon crawler
//!
//! Builds a connected, grid-aligned floor of rooms with a start room, a
//! boss room and an item room, then links neighbouring rooms with regular
//! or key-locked doors. This crate has no I/O dependencies; the `floorgen`
//! binary in `fg-cli` drives it from the command line.
//!
//! ```
//! use fg_core::floor::Floor;
//!
//! let floor = Floor::with_seed(5, 42).unwrap();
//! assert_eq!(floor.rooms_map().len(), 5);
//! print!("{floor}");
//! ```

pub mod floor;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::FloorError;
pub use rng::FloorRng;
