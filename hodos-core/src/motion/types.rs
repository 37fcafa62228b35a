//! Motion vocabulary types
//!
//! Small enums and results shared by the motion primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How translational and turning drives complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompletionMode {
    /// Primitives return only after both wheels report stopped
    #[default]
    Blocking,
    /// Primitives return as soon as wheel targets are dispatched
    NonBlocking,
}

/// Travel direction for obstacle-bounded drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TravelDirection {
    /// Along the current heading
    Forward,
    /// Against the current heading
    Reverse,
}

impl TravelDirection {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            TravelDirection::Forward => TravelDirection::Reverse,
            TravelDirection::Reverse => TravelDirection::Forward,
        }
    }

    /// Sign applied to wheel targets: +1 forward, -1 reverse.
    pub fn signum(self) -> f32 {
        match self {
            TravelDirection::Forward => 1.0,
            TravelDirection::Reverse => -1.0,
        }
    }

    /// Offset added to the heading to get the travel direction in degrees.
    pub fn heading_offset_deg(self) -> f32 {
        match self {
            TravelDirection::Forward => 0.0,
            TravelDirection::Reverse => 180.0,
        }
    }
}

/// Why an obstacle-bounded drive stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopCause {
    /// The bumper switch triggered
    Bumper,
    /// The runaway safety ceiling was reached without a trigger
    Ceiling,
}

/// Outcome of an obstacle-bounded drive
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstacleStop {
    /// Wheel travel until the stop, in full rotations
    pub rotations: f32,
    /// What ended the drive
    pub cause: StopCause,
}

impl ObstacleStop {
    /// Whether the drive actually found an obstacle, as opposed to
    /// running out the safety ceiling.
    pub fn hit_obstacle(&self) -> bool {
        matches!(self.cause, StopCause::Bumper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_mode_default_blocks() {
        assert_eq!(CompletionMode::default(), CompletionMode::Blocking);
    }

    #[test]
    fn test_travel_direction_opposite() {
        assert_eq!(
            TravelDirection::Forward.opposite(),
            TravelDirection::Reverse
        );
        assert_eq!(
            TravelDirection::Reverse.opposite(),
            TravelDirection::Forward
        );
    }

    #[test]
    fn test_travel_direction_conventions() {
        assert_eq!(TravelDirection::Forward.signum(), 1.0);
        assert_eq!(TravelDirection::Reverse.signum(), -1.0);
        assert_eq!(TravelDirection::Forward.heading_offset_deg(), 0.0);
        assert_eq!(TravelDirection::Reverse.heading_offset_deg(), 180.0);
    }

    #[test]
    fn test_obstacle_stop_cause() {
        let hit = ObstacleStop {
            rotations: 2.5,
            cause: StopCause::Bumper,
        };
        assert!(hit.hit_obstacle());

        let ran_out = ObstacleStop {
            rotations: 27777.7,
            cause: StopCause::Ceiling,
        };
        assert!(!ran_out.hit_obstacle());
    }
}
