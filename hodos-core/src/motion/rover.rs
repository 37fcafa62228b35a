//! Dead-reckoning motion controller
//!
//! [`Rover`] owns the chassis and an estimated [`Pose`], advancing the
//! estimate from the distances it commands rather than from encoder
//! feedback. Encoders are read only inside the obstacle-bounded drive,
//! where the actual stopping point is unknowable in advance.
//!
//! Sign conventions: positive wheel degrees roll the robot along its
//! heading, negative against it. Positive turn degrees rotate the
//! heading counter-clockwise (left wheel backward, right wheel forward).

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::config::DriveConfig;
use crate::pose::{self, Pose};
use crate::traits::display::MAX_LINE_LEN;
use crate::traits::{BumpPort, Chassis, NullDisplay, StatusDisplay, Wheel};

use super::types::{CompletionMode, ObstacleStop, StopCause, TravelDirection};

/// Dead-reckoning motion controller for a differential-drive chassis.
///
/// Built once at program start and mutated in place for the lifetime of
/// the control program. Primitives never run concurrently; the single
/// `&mut self` owner serializes them.
pub struct Rover<C, D = NullDisplay> {
    chassis: C,
    display: D,
    config: DriveConfig,
    pose: Pose,
    completion_mode: CompletionMode,
    drive_power: i16,
    calibration_factor: f32,
    bump_port: BumpPort,
}

impl<C: Chassis> Rover<C> {
    /// Create a controller with no status display.
    pub fn new(chassis: C, config: DriveConfig) -> Self {
        Self::with_display(chassis, NullDisplay, config)
    }
}

impl<C: Chassis, D: StatusDisplay> Rover<C, D> {
    /// Create a controller that reports status through `display`.
    ///
    /// No hardware is touched. The pose starts at the origin facing
    /// `config.initial_heading_deg`, and the runtime settings (power,
    /// calibration, completion mode, bumper port) start from the config.
    pub fn with_display(chassis: C, display: D, config: DriveConfig) -> Self {
        Self {
            pose: Pose::new(0.0, 0.0, config.initial_heading_deg),
            completion_mode: config.completion_mode,
            drive_power: config.drive_power,
            calibration_factor: config.calibration_factor,
            bump_port: config.bump_port,
            chassis,
            display,
            config,
        }
    }

    /// Current pose estimate.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current heading estimate in degrees, always in `(-180, 180]`.
    pub fn heading_deg(&self) -> f32 {
        self.pose.heading_deg
    }

    /// Drive geometry and defaults this controller was built with.
    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// Current completion mode.
    pub fn completion_mode(&self) -> CompletionMode {
        self.completion_mode
    }

    /// Set how translational and turning drives complete.
    pub fn set_completion_mode(&mut self, mode: CompletionMode) {
        self.completion_mode = mode;
    }

    /// Current drive power in hardware units.
    pub fn drive_power(&self) -> i16 {
        self.drive_power
    }

    /// Set the power level for subsequent drives and turns.
    pub fn set_drive_power(&mut self, power: i16) {
        self.drive_power = power;
    }

    /// Current multiplicative turn correction.
    pub fn calibration_factor(&self) -> f32 {
        self.calibration_factor
    }

    /// Set the multiplicative turn correction for subsequent turns.
    pub fn set_calibration_factor(&mut self, factor: f32) {
        self.calibration_factor = factor;
    }

    /// Bumper port polled by obstacle-bounded drives.
    pub fn bump_port(&self) -> BumpPort {
        self.bump_port
    }

    /// Select the bumper port for subsequent obstacle-bounded drives.
    pub fn set_bump_port(&mut self, port: BumpPort) {
        self.bump_port = port;
    }

    /// Wheel travel since its last encoder reset, in full rotations.
    pub fn encoder_rotations(&mut self, wheel: Wheel) -> f32 {
        self.chassis.encoder_degrees(wheel) / pose::DEGREES_PER_ROTATION
    }

    /// Give back the chassis and display.
    pub fn release(self) -> (C, D) {
        (self.chassis, self.display)
    }

    /// Drive both wheels by `degrees` of wheel rotation.
    ///
    /// Positive degrees roll along the current heading, negative against
    /// it; the pose estimate advances by the commanded arc either way,
    /// at dispatch. Requests within the zero tolerance return without
    /// touching hardware. In [`CompletionMode::Blocking`] the call
    /// returns after both wheels report stopped.
    pub fn move_degrees(&mut self, degrees: f32) {
        if self.config.is_zero(degrees) {
            return;
        }

        self.chassis.reset_encoder(Wheel::Left);
        self.chassis.reset_encoder(Wheel::Right);

        let power = if degrees > 0.0 {
            self.drive_power
        } else {
            self.drive_power.saturating_neg()
        };
        self.chassis.command_target(Wheel::Left, degrees, power);
        self.chassis.command_target(Wheel::Right, degrees, power);

        let distance = self.config.wheel_deg_to_inches(libm::fabsf(degrees));
        let travel_deg = if degrees > 0.0 {
            self.pose.heading_deg
        } else {
            self.pose.heading_deg + 180.0
        };
        self.pose.translate(distance, travel_deg);

        self.settle();
    }

    /// Drive by whole wheel rotations.
    pub fn move_rotations(&mut self, rotations: f32) {
        self.move_degrees(rotations * pose::DEGREES_PER_ROTATION);
    }

    /// Drive a straight-line distance in inches, negative to back up.
    pub fn move_inches(&mut self, inches: f32) {
        self.move_degrees(self.config.inches_to_wheel_deg(inches));
    }

    /// Turn in place by `delta_deg` robot degrees, positive
    /// counter-clockwise.
    ///
    /// The wheels counter-rotate by the calibrated target from
    /// [`DriveConfig::turn_deg_to_wheel_deg`]. The heading estimate
    /// updates at dispatch and stays normalized; position is untouched.
    pub fn point_turn(&mut self, delta_deg: f32) {
        let wheel_deg = self
            .config
            .turn_deg_to_wheel_deg(delta_deg, self.calibration_factor);

        self.chassis.reset_encoder(Wheel::Left);
        self.chassis.reset_encoder(Wheel::Right);

        self.chassis
            .command_target(Wheel::Left, -wheel_deg, self.drive_power);
        self.chassis
            .command_target(Wheel::Right, wheel_deg, self.drive_power);

        self.pose.rotate(delta_deg);
        self.report_heading();

        self.settle();
    }

    /// Turn in place to an absolute heading, taking the shorter arc.
    ///
    /// The applied delta is the normalized heading difference, so its
    /// magnitude never exceeds 180 degrees; an exact half-turn goes
    /// counter-clockwise.
    pub fn turn_to_heading(&mut self, target_deg: f32) {
        let delta = pose::normalize_deg(target_deg - self.pose.heading_deg);
        self.point_turn(delta);
    }

    /// Drive until the bumper triggers, returning the travel and why it
    /// stopped.
    ///
    /// Both wheels run toward the runaway ceiling while the bumper is
    /// polled at the configured interval; reaching the ceiling on either
    /// encoder ends the drive without a trigger. Always blocks regardless
    /// of completion mode. Afterward the encoders are reset and the
    /// wheels idle; the pose advances by the distance actually rolled
    /// (mean of both encoders).
    pub fn drive_until_bump(&mut self, direction: TravelDirection) -> ObstacleStop {
        let ceiling = self.config.runaway_ceiling_deg;

        self.chassis.reset_encoder(Wheel::Left);
        self.chassis.reset_encoder(Wheel::Right);

        let target = direction.signum() * ceiling;
        self.chassis
            .command_target(Wheel::Left, target, self.drive_power);
        self.chassis
            .command_target(Wheel::Right, target, self.drive_power);

        let cause = loop {
            if self.chassis.bumper_pressed(self.bump_port) {
                break StopCause::Bumper;
            }
            if libm::fabsf(self.chassis.encoder_degrees(Wheel::Left)) >= ceiling
                || libm::fabsf(self.chassis.encoder_degrees(Wheel::Right)) >= ceiling
            {
                break StopCause::Ceiling;
            }
            self.chassis.delay_ms(self.config.poll_interval_ms);
        };

        let left = libm::fabsf(self.chassis.encoder_degrees(Wheel::Left));
        let right = libm::fabsf(self.chassis.encoder_degrees(Wheel::Right));
        let traveled_deg = (left + right) / 2.0;

        let distance = self.config.wheel_deg_to_inches(traveled_deg);
        let travel_deg = self.pose.heading_deg + direction.heading_offset_deg();
        self.pose.translate(distance, travel_deg);

        self.chassis.reset_encoder(Wheel::Left);
        self.chassis.reset_encoder(Wheel::Right);

        ObstacleStop {
            rotations: traveled_deg / pose::DEGREES_PER_ROTATION,
            cause,
        }
    }

    /// Turn toward `(x, y)` and drive the straight-line distance.
    ///
    /// The bearing comes from the four-quadrant arctangent of the
    /// displacement. Already being at the target (both components within
    /// the zero tolerance) is a no-op with no hardware calls.
    pub fn move_to_point(&mut self, x: f32, y: f32) {
        let dx = x - self.pose.x;
        let dy = y - self.pose.y;
        if self.config.is_zero(dx) && self.config.is_zero(dy) {
            return;
        }

        self.turn_to_heading(self.pose.bearing_to(x, y));
        self.move_inches(self.pose.distance_to(x, y));
    }

    /// Block until both wheels report stopped, in blocking mode.
    fn settle(&mut self) {
        if self.completion_mode == CompletionMode::Blocking {
            self.chassis.wait_until_stopped(Wheel::Left);
            self.chassis.wait_until_stopped(Wheel::Right);
        }
    }

    /// Best-effort heading line on the status display.
    fn report_heading(&mut self) {
        let mut line: String<MAX_LINE_LEN> = String::new();
        if write!(line, "hdg {:.1}", self.pose.heading_deg).is_ok() {
            let _ = self.display.show_line(&line);
            let _ = self.display.flush();
        }
    }
}
