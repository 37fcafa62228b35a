//! Kinematic chassis model
//!
//! Wheels advance toward their commanded targets at a fixed rate while
//! simulated time passes through the delay calls, so the controller's
//! blocking waits and polling loops run at full host speed. A scripted
//! bumper freezes both wheels where they stand, the way a wall would.

use embedded_hal::delay::DelayNs;
use hodos_core::traits::{BumpPort, Chassis, Wheel};

/// Default wheel rotation rate toward targets, degrees per millisecond.
pub const DEFAULT_RATE_DEG_PER_MS: f64 = 3.6;

/// When the scripted bumper trips
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BumperScript {
    /// Never trips
    #[default]
    Clear,
    /// Pressed from the start; the chassis cannot move
    Pressed,
    /// Trips once the chassis accumulates this much mean wheel travel
    /// since construction, in encoder degrees
    AfterTravel(f64),
}

#[derive(Debug, Clone, Copy, Default)]
struct SimWheel {
    encoder_deg: f64,
    target_deg: Option<f64>,
}

impl SimWheel {
    fn remaining_deg(&self) -> f64 {
        self.target_deg.map_or(0.0, |t| t - self.encoder_deg)
    }
}

/// Simulated differential-drive chassis
#[derive(Debug)]
pub struct SimChassis {
    wheels: [SimWheel; 2],
    rate_deg_per_ms: f64,
    bumper: BumperScript,
    travel_deg: f64,
    pressed: bool,
    elapsed_ms: f64,
}

impl SimChassis {
    /// Chassis with a bumper that never trips.
    ///
    /// # Panics
    ///
    /// Panics if `rate_deg_per_ms` is not positive.
    pub fn new(rate_deg_per_ms: f64) -> Self {
        Self::with_bumper(rate_deg_per_ms, BumperScript::Clear)
    }

    /// Chassis with a scripted bumper.
    ///
    /// # Panics
    ///
    /// Panics if `rate_deg_per_ms` is not positive.
    pub fn with_bumper(rate_deg_per_ms: f64, bumper: BumperScript) -> Self {
        assert!(rate_deg_per_ms > 0.0, "rate_deg_per_ms must be positive");
        Self {
            wheels: [SimWheel::default(); 2],
            rate_deg_per_ms,
            bumper,
            travel_deg: 0.0,
            pressed: matches!(bumper, BumperScript::Pressed),
            elapsed_ms: 0.0,
        }
    }

    /// Simulated time passed so far, milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Mean absolute wheel travel accumulated since construction, degrees.
    pub fn travel_deg(&self) -> f64 {
        self.travel_deg
    }

    fn index(wheel: Wheel) -> usize {
        match wheel {
            Wheel::Left => 0,
            Wheel::Right => 1,
        }
    }

    /// Advance the model by `ms` of simulated time.
    fn advance(&mut self, ms: f64) {
        self.elapsed_ms += ms;
        if self.pressed {
            return;
        }

        let step = self.rate_deg_per_ms * ms;
        let mut deltas = [0.0f64; 2];
        for (wheel, delta) in self.wheels.iter().zip(deltas.iter_mut()) {
            *delta = wheel.remaining_deg().clamp(-step, step);
        }

        let mut inc = (deltas[0].abs() + deltas[1].abs()) / 2.0;
        let mut fraction = 1.0;
        if let BumperScript::AfterTravel(threshold) = self.bumper {
            if inc > 0.0 && self.travel_deg + inc >= threshold {
                fraction = ((threshold - self.travel_deg) / inc).clamp(0.0, 1.0);
                self.pressed = true;
            }
        }

        for (wheel, delta) in self.wheels.iter_mut().zip(deltas) {
            wheel.encoder_deg += delta * fraction;
        }
        inc *= fraction;
        self.travel_deg += inc;
    }
}

impl DelayNs for SimChassis {
    fn delay_ns(&mut self, ns: u32) {
        self.advance(f64::from(ns) / 1_000_000.0);
    }
}

impl Chassis for SimChassis {
    fn reset_encoder(&mut self, wheel: Wheel) {
        let w = &mut self.wheels[Self::index(wheel)];
        w.encoder_deg = 0.0;
        w.target_deg = None;
    }

    fn command_target(&mut self, wheel: Wheel, degrees: f32, power: i16) {
        let w = &mut self.wheels[Self::index(wheel)];
        w.target_deg = Some(w.encoder_deg + f64::from(degrees));
        log::trace!("command {:?} by {:.1} deg at power {}", wheel, degrees, power);
    }

    fn encoder_degrees(&mut self, wheel: Wheel) -> f32 {
        self.wheels[Self::index(wheel)].encoder_deg as f32
    }

    fn wait_until_stopped(&mut self, wheel: Wheel) {
        // Run the clock until this wheel's motion completes; a contact
        // stall counts as stopped.
        loop {
            if self.pressed {
                break;
            }
            let remaining = self.wheels[Self::index(wheel)].remaining_deg().abs();
            if remaining < 1e-6 {
                break;
            }
            // Slight overshoot so the clamp snaps exactly onto the target.
            self.advance(remaining / self.rate_deg_per_ms + 1e-6);
        }
    }

    fn bumper_pressed(&mut self, port: BumpPort) -> bool {
        let pressed = self.pressed;
        log::trace!("bumper {:?}: {}", port, pressed);
        pressed
    }
}
