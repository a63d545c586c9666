//! Floor generation errors

use thiserror::Error;

/// Errors that can occur while configuring or generating a floor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FloorError {
    #[error("No room count was supplied")]
    MissingRoomCount,

    #[error("A floor needs at least {minimum} rooms, {requested} requested")]
    TooFewRooms { requested: usize, minimum: usize },

    #[error(
        "Maximum distance from start must be between 1 and {max}, got {0}",
        max = crate::MAX_GRID_DISTANCE
    )]
    InvalidMaxDistance(i32),

    #[error("{requested} rooms cannot fit in a grid of {capacity} cells")]
    ExceedsGridCapacity { requested: usize, capacity: usize },

    #[error("Maximum attempts must be at least 1")]
    InvalidMaxAttempts,

    #[error("Unable to generate a valid floor of {rooms} rooms within {attempts} attempts")]
    GenerationFailed { attempts: u32, rooms: usize },
}
