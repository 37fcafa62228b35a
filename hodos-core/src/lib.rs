//! Board-agnostic dead-reckoning motion control for differential-drive robots
//!
//! This crate contains all controller logic that does not depend on a
//! specific chassis or board:
//!
//! - Hardware abstraction traits (chassis, status display)
//! - Planar pose tracking and angle math
//! - Motion primitives (straight drives, in-place turns, point-to-point)
//! - Obstacle-bounded driving with a runaway ceiling
//! - Drive geometry and behavior configuration
//!
//! The controller never reads wheel encoders to correct its estimate:
//! position and heading are advanced optimistically from the distances it
//! commands. Hardware access goes through [`traits::Chassis`], so the same
//! logic runs against firmware HALs and the host-side simulator alike.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod motion;
pub mod pose;
pub mod traits;
