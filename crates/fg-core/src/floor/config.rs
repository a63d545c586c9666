//! Floor generation parameters
//!
//! [`FloorConfig`] holds everything that shapes a floor; [`FloorBuilder`]
//! is the fluent way to assemble one when the room count may be missing.
//!
//! ```
//! use fg_core::floor::FloorBuilder;
//!
//! let floor = FloorBuilder::new().rooms(6).seed(42).build().unwrap();
//! assert_eq!(floor.rooms_map().len(), 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FloorError;
use crate::rng::FloorRng;
use crate::{
    DEFAULT_MAX_ATTEMPTS, MAX_DIST_FROM_START, MAX_GRID_DISTANCE, MINIMUM_ROOMS_AMOUNT,
    grid_capacity,
};

use super::Floor;

/// Parameters for generating a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorConfig {
    /// Exact number of rooms on the finished floor
    pub rooms: usize,
    /// Half-extent of the square grid, shared by generation and rendering
    pub max_distance: i32,
    /// Growth attempts before giving up (None = retry forever)
    pub max_attempts: Option<u32>,
    /// Random seed for generation (None = random)
    pub seed: Option<u64>,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            rooms: MINIMUM_ROOMS_AMOUNT,
            max_distance: MAX_DIST_FROM_START,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            seed: None,
        }
    }
}

impl FloorConfig {
    /// Default configuration for the given room count
    pub fn with_rooms(rooms: usize) -> Self {
        Self {
            rooms,
            ..Default::default()
        }
    }

    /// Reject configurations that can never produce a floor
    pub fn validate(&self) -> Result<(), FloorError> {
        if self.rooms < MINIMUM_ROOMS_AMOUNT {
            return Err(FloorError::TooFewRooms {
                requested: self.rooms,
                minimum: MINIMUM_ROOMS_AMOUNT,
            });
        }
        if !(1..=MAX_GRID_DISTANCE).contains(&self.max_distance) {
            return Err(FloorError::InvalidMaxDistance(self.max_distance));
        }
        let capacity = grid_capacity(self.max_distance);
        if self.rooms > capacity {
            return Err(FloorError::ExceedsGridCapacity {
                requested: self.rooms,
                capacity,
            });
        }
        if self.max_attempts == Some(0) {
            return Err(FloorError::InvalidMaxAttempts);
        }
        Ok(())
    }

    /// RNG for this configuration: seeded if a seed is set, otherwise random
    pub fn rng(&self) -> FloorRng {
        match self.seed {
            Some(seed) => FloorRng::new(seed),
            None => FloorRng::from_entropy(),
        }
    }
}

/// Fluent floor configuration
///
/// Unlike [`FloorConfig`], the room count starts unset and `build` fails
/// if it is never supplied.
#[derive(Debug, Clone, Default)]
pub struct FloorBuilder {
    rooms: Option<usize>,
    max_distance: Option<i32>,
    max_attempts: Option<Option<u32>>,
    seed: Option<u64>,
}

impl FloorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooms(mut self, rooms: usize) -> Self {
        self.rooms = Some(rooms);
        self
    }

    pub fn max_distance(mut self, max_distance: i32) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(Some(max_attempts));
        self
    }

    /// Retry growth until it succeeds, with no attempt ceiling
    pub fn unbounded(mut self) -> Self {
        self.max_attempts = Some(None);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolve into a validated configuration
    pub fn config(&self) -> Result<FloorConfig, FloorError> {
        let defaults = FloorConfig::default();
        let config = FloorConfig {
            rooms: self.rooms.ok_or(FloorError::MissingRoomCount)?,
            max_distance: self.max_distance.unwrap_or(defaults.max_distance),
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Generate the floor
    pub fn build(&self) -> Result<Floor, FloorError> {
        let config = self.config()?;
        let mut rng = config.rng();
        Floor::generate(config, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FloorConfig::default();
        assert_eq!(config.rooms, 3);
        assert_eq!(config.max_distance, MAX_DIST_FROM_START);
        assert_eq!(config.max_attempts, Some(DEFAULT_MAX_ATTEMPTS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_too_few_rooms() {
        for rooms in 0..3 {
            assert_eq!(
                FloorConfig::with_rooms(rooms).validate(),
                Err(FloorError::TooFewRooms {
                    requested: rooms,
                    minimum: 3
                })
            );
        }
        assert!(FloorConfig::with_rooms(3).validate().is_ok());
    }

    #[test]
    fn test_invalid_max_distance() {
        let config = FloorConfig {
            max_distance: 0,
            ..FloorConfig::with_rooms(3)
        };
        assert_eq!(config.validate(), Err(FloorError::InvalidMaxDistance(0)));
    }

    #[test]
    fn test_max_distance_upper_bound() {
        assert!(matches!(
            FloorBuilder::new().rooms(5).max_distance(i32::MAX).config(),
            Err(FloorError::InvalidMaxDistance(_))
        ));
        assert_eq!(
            FloorBuilder::new().rooms(5).max_distance(1 << 30).seed(1).config(),
            Err(FloorError::InvalidMaxDistance(1 << 30))
        );
        let config = FloorConfig {
            max_distance: MAX_GRID_DISTANCE + 1,
            ..FloorConfig::with_rooms(5)
        };
        assert_eq!(
            config.validate(),
            Err(FloorError::InvalidMaxDistance(MAX_GRID_DISTANCE + 1))
        );
        let widest = FloorConfig {
            max_distance: MAX_GRID_DISTANCE,
            ..FloorConfig::with_rooms(5)
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_exceeds_capacity() {
        let config = FloorConfig {
            max_distance: 1,
            ..FloorConfig::with_rooms(10)
        };
        assert_eq!(
            config.validate(),
            Err(FloorError::ExceedsGridCapacity {
                requested: 10,
                capacity: 9
            })
        );
    }

    #[test]
    fn test_zero_attempts() {
        let config = FloorConfig {
            max_attempts: Some(0),
            ..FloorConfig::with_rooms(5)
        };
        assert_eq!(config.validate(), Err(FloorError::InvalidMaxAttempts));
    }

    #[test]
    fn test_builder_missing_rooms() {
        assert_eq!(
            FloorBuilder::new().seed(1).config(),
            Err(FloorError::MissingRoomCount)
        );
        assert!(matches!(
            FloorBuilder::new().build(),
            Err(FloorError::MissingRoomCount)
        ));
    }

    #[test]
    fn test_builder_fields() {
        let config = FloorBuilder::new()
            .rooms(7)
            .max_distance(4)
            .max_attempts(50)
            .seed(9)
            .config()
            .unwrap();
        assert_eq!(
            config,
            FloorConfig {
                rooms: 7,
                max_distance: 4,
                max_attempts: Some(50),
                seed: Some(9),
            }
        );

        let unbounded = FloorBuilder::new().rooms(7).unbounded().config().unwrap();
        assert_eq!(unbounded.max_attempts, None);
    }

    #[test]
    fn test_seeded_rng() {
        let config = FloorConfig {
            seed: Some(5),
            ..FloorConfig::with_rooms(4)
        };
        assert_eq!(config.rng().seed(), 5);
    }
}
