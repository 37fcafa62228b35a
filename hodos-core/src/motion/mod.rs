//! Motion primitives
//!
//! Dead-reckoning drive and turn primitives layered over the chassis
//! trait. [`Rover`] is the controller; the types module holds the
//! vocabulary its API speaks.

pub mod rover;
pub mod types;

pub use rover::Rover;
pub use types::{CompletionMode, ObstacleStop, StopCause, TravelDirection};
