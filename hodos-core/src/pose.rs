//! Planar pose tracking and angle math
//!
//! World frame conventions: positions in inches, angles in degrees
//! measured counter-clockwise from the +x axis. Headings are kept in the
//! canonical `(-180, 180]` range, matching the principal range of the
//! two-argument arctangent so bearings and stored headings compare
//! directly.

use core::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wheel encoder degrees in one full rotation.
pub const DEGREES_PER_ROTATION: f32 = 360.0;

/// Estimated robot pose: position in inches, heading in degrees.
///
/// The pose is a dead-reckoning estimate. It advances from commanded
/// distances, never from encoder feedback, so it drifts with wheel slip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// World-frame x position (inches).
    pub x: f32,
    /// World-frame y position (inches).
    pub y: f32,
    /// Heading in degrees counter-clockwise from +x, in `(-180, 180]`.
    pub heading_deg: f32,
}

impl Pose {
    /// Construct a pose, normalizing the heading.
    pub fn new(x: f32, y: f32, heading_deg: f32) -> Self {
        Self {
            x,
            y,
            heading_deg: normalize_deg(heading_deg),
        }
    }

    /// Translate by `distance_in` inches along the absolute direction
    /// `travel_deg`. The heading is untouched.
    pub fn translate(&mut self, distance_in: f32, travel_deg: f32) {
        let rad = deg_to_rad(travel_deg);
        self.x += distance_in * libm::cosf(rad);
        self.y += distance_in * libm::sinf(rad);
    }

    /// Rotate in place by `delta_deg`. The position is untouched and the
    /// resulting heading is normalized.
    pub fn rotate(&mut self, delta_deg: f32) {
        self.heading_deg = normalize_deg(self.heading_deg + delta_deg);
    }

    /// Straight-line distance in inches from this pose to `(x, y)`.
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        libm::sqrtf(dx * dx + dy * dy)
    }

    /// Absolute heading in degrees from this pose toward `(x, y)`.
    pub fn bearing_to(&self, x: f32, y: f32) -> f32 {
        heading_toward(x - self.x, y - self.y)
    }
}

/// Normalize an angle in degrees to the canonical `(-180, 180]` range.
///
/// `-180` and `540` both map to `180`; full turns map to `0`.
pub fn normalize_deg(angle_deg: f32) -> f32 {
    let turns = libm::floorf(angle_deg / DEGREES_PER_ROTATION);
    let wrapped = angle_deg - DEGREES_PER_ROTATION * turns;
    if wrapped > 180.0 {
        wrapped - DEGREES_PER_ROTATION
    } else {
        wrapped
    }
}

/// Heading in degrees from the origin toward the displacement `(dx, dy)`.
///
/// Four-quadrant: signs of both components pick the quadrant, so the
/// result covers the full circle rather than the `(-90, 90)` range a
/// single-argument arctangent would give. A zero displacement maps to 0°.
pub fn heading_toward(dx: f32, dy: f32) -> f32 {
    normalize_deg(rad_to_deg(libm::atan2f(dy, dx)))
}

/// Convert degrees to radians.
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

/// Convert radians to degrees.
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * (180.0 / PI)
}
