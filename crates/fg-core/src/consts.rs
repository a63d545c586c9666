//! Core floor generation constants
//!
//! Grid extents and room limits shared by generation and rendering.

/// Maximum distance in each axis a room can be from the starting room (0, 0)
pub const MAX_DIST_FROM_START: i32 = 3;

/// Largest accepted half-extent; keeps grid sizes and rendering bounded
pub const MAX_GRID_DISTANCE: i32 = 64;

/// Number of special rooms placed on every floor (boss + item)
pub const SPECIAL_ROOMS_AMOUNT: usize = 2;

/// Smallest room count that leaves room for the start plus every special room
pub const MINIMUM_ROOMS_AMOUNT: usize = SPECIAL_ROOMS_AMOUNT + 1;

/// Default ceiling on growth attempts before generation is reported as failed
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Number of cells along one side of the square grid for a given half-extent
///
/// The half-extent is clamped to `0..=MAX_GRID_DISTANCE`.
pub const fn grid_side(max_distance: i32) -> usize {
    let clamped = if max_distance < 0 {
        0
    } else if max_distance > MAX_GRID_DISTANCE {
        MAX_GRID_DISTANCE
    } else {
        max_distance
    };
    2 * clamped as usize + 1
}

/// Number of cells in the square grid for a given half-extent
pub const fn grid_capacity(max_distance: i32) -> usize {
    let side = grid_side(max_distance);
    side * side
}
