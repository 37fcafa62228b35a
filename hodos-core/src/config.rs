//! Drive geometry and behavior configuration
//!
//! These values are fixed properties of the robot build (wheel geometry,
//! turn gearing) plus the initial settings the controller starts with.
//! Runtime-tunable settings (power, calibration, completion mode, bumper
//! port) are copied out of the config at construction and changed through
//! setters on the controller.

use crate::motion::CompletionMode;
use crate::traits::BumpPort;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wheel circumference in inches (4-inch wheel).
pub const DEFAULT_WHEEL_CIRCUMFERENCE_IN: f32 = 12.57;

/// Wheel radius in inches.
pub const DEFAULT_WHEEL_RADIUS_IN: f32 = 2.0;

/// Scale from robot turn degrees to wheel target degrees, applied
/// together with the wheel radius. Encodes the gear and track-width
/// ratio of the chassis; tuned empirically.
pub const DEFAULT_TURN_RATIO: f32 = 4.0;

/// Motor power level for all drives and turns (hardware units).
pub const DEFAULT_DRIVE_POWER: i16 = 23;

/// Multiplicative turn correction; zero means no correction.
pub const DEFAULT_CALIBRATION_FACTOR: f32 = 0.0;

/// Bumper switch port the obstacle drive polls.
pub const DEFAULT_BUMP_PORT: BumpPort = BumpPort(8);

/// Heading the robot faces at power-on, degrees counter-clockwise
/// from +x (straight up the +y axis).
pub const DEFAULT_INITIAL_HEADING_DEG: f32 = 90.0;

/// Sensor poll interval during obstacle drives, milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Runaway safety ceiling for obstacle drives, encoder degrees.
pub const DEFAULT_RUNAWAY_CEILING_DEG: f32 = 10_000_000.0;

/// Magnitude below which a requested distance or angle counts as zero.
pub const DEFAULT_ZERO_TOLERANCE: f32 = 1.0e-4;

/// Drive geometry and initial controller settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriveConfig {
    /// Wheel circumference in inches.
    pub wheel_circumference_in: f32,
    /// Wheel radius in inches.
    pub wheel_radius_in: f32,
    /// Turn-degree to wheel-degree scale (see [`DEFAULT_TURN_RATIO`]).
    pub turn_ratio: f32,
    /// Initial motor power (hardware units, sign selects direction).
    pub drive_power: i16,
    /// Initial multiplicative turn correction.
    pub calibration_factor: f32,
    /// Initial completion mode for translational and turning drives.
    pub completion_mode: CompletionMode,
    /// Initial bumper switch port.
    pub bump_port: BumpPort,
    /// Heading at power-on, degrees counter-clockwise from +x.
    pub initial_heading_deg: f32,
    /// Sensor poll interval during obstacle drives, milliseconds.
    pub poll_interval_ms: u32,
    /// Runaway safety ceiling for obstacle drives, encoder degrees.
    pub runaway_ceiling_deg: f32,
    /// Magnitude below which a requested value counts as zero.
    pub zero_tolerance: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            wheel_circumference_in: DEFAULT_WHEEL_CIRCUMFERENCE_IN,
            wheel_radius_in: DEFAULT_WHEEL_RADIUS_IN,
            turn_ratio: DEFAULT_TURN_RATIO,
            drive_power: DEFAULT_DRIVE_POWER,
            calibration_factor: DEFAULT_CALIBRATION_FACTOR,
            completion_mode: CompletionMode::Blocking,
            bump_port: DEFAULT_BUMP_PORT,
            initial_heading_deg: DEFAULT_INITIAL_HEADING_DEG,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            runaway_ceiling_deg: DEFAULT_RUNAWAY_CEILING_DEG,
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
        }
    }
}

impl DriveConfig {
    /// Wheel rotation in encoder degrees that rolls `inches` of ground.
    pub fn inches_to_wheel_deg(&self, inches: f32) -> f32 {
        crate::pose::DEGREES_PER_ROTATION / self.wheel_circumference_in * inches
    }

    /// Ground distance in inches rolled by `wheel_deg` encoder degrees.
    pub fn wheel_deg_to_inches(&self, wheel_deg: f32) -> f32 {
        wheel_deg / crate::pose::DEGREES_PER_ROTATION * self.wheel_circumference_in
    }

    /// Wheel target in encoder degrees for an in-place turn of
    /// `turn_deg` robot degrees, corrected by `calibration_factor`.
    pub fn turn_deg_to_wheel_deg(&self, turn_deg: f32, calibration_factor: f32) -> f32 {
        self.turn_ratio * turn_deg * (1.0 + calibration_factor) / self.wheel_radius_in
    }

    /// Whether a requested value is close enough to zero to skip.
    pub fn is_zero(&self, value: f32) -> bool {
        libm::fabsf(value) < self.zero_tolerance
    }
}
