//! Differential-drive chassis trait
//!
//! This trait abstracts over chassis implementations (firmware HALs,
//! host-side simulators) behind the five capabilities the controller
//! needs: encoder reset, targeted wheel rotation, encoder readout,
//! stop waiting, and bumper polling.

use embedded_hal::delay::DelayNs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Drive wheel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wheel {
    /// Left drive wheel
    Left,
    /// Right drive wheel
    Right,
}

/// Bumper switch port identifier
///
/// Ports are small hardware-assigned indices; what the number maps to
/// is up to the chassis implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BumpPort(pub u8);

/// Trait for differential-drive chassis hardware
///
/// One implementor owns both drive wheels, their encoders, the bumper
/// switches, and a blocking delay source (the [`DelayNs`] supertrait).
/// Encoders count wheel rotation in signed degrees accumulated since the
/// last reset.
pub trait Chassis: DelayNs {
    /// Zero a wheel's encoder.
    ///
    /// Also cancels any outstanding rotation target for that wheel,
    /// leaving it idle.
    fn reset_encoder(&mut self, wheel: Wheel);

    /// Command a wheel to rotate by `degrees` from its current position.
    ///
    /// Returns immediately; the rotation completes in the background.
    /// The sign of `degrees` selects the rotation sense, and callers
    /// conventionally pass `power` with a matching sign. Magnitude of
    /// `power` sets the drive level in hardware units.
    fn command_target(&mut self, wheel: Wheel, degrees: f32, power: i16);

    /// Current encoder reading in degrees since the last reset.
    fn encoder_degrees(&mut self, wheel: Wheel) -> f32;

    /// Block until the wheel's outstanding rotation finishes.
    ///
    /// Returns immediately if the wheel has no outstanding target.
    fn wait_until_stopped(&mut self, wheel: Wheel);

    /// Whether the bumper switch on `port` is currently pressed.
    fn bumper_pressed(&mut self, port: BumpPort) -> bool;
}
