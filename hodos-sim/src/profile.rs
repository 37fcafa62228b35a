//! Simulation profiles loaded from TOML
//!
//! A profile bundles the controller's drive configuration with the
//! simulator parameters, so one scenario file fully describes a run.

use std::fs;
use std::path::Path;

use hodos_core::config::DriveConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chassis::{BumperScript, SimChassis, DEFAULT_RATE_DEG_PER_MS};

/// Errors from loading a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Could not read the profile file
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),
    /// The file was not valid TOML for this schema
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),
    /// A parameter value the simulator cannot run with
    #[error("sim rate must be positive, got {0} deg/ms")]
    InvalidRate(f64),
}

/// Simulator tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Wheel rotation rate toward targets, degrees per millisecond
    pub rate_deg_per_ms: f64,
    /// Mean wheel travel in degrees after which the bumper trips;
    /// absent means the bumper never trips
    #[serde(default)]
    pub bumper_after_travel_deg: Option<f64>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            rate_deg_per_ms: DEFAULT_RATE_DEG_PER_MS,
            bumper_after_travel_deg: None,
        }
    }
}

impl SimParams {
    /// Bumper script these parameters describe.
    pub fn bumper_script(&self) -> BumperScript {
        match self.bumper_after_travel_deg {
            Some(threshold) => BumperScript::AfterTravel(threshold),
            None => BumperScript::Clear,
        }
    }
}

/// A complete simulation scenario: drive config plus simulator setup
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimProfile {
    /// Controller drive configuration
    pub drive: DriveConfig,
    /// Simulator parameters
    pub sim: SimParams,
}

impl SimProfile {
    /// Parse a profile from TOML text.
    ///
    /// Rejects rates the chassis model cannot run with, so a loaded
    /// profile always builds a usable [`SimChassis`].
    pub fn from_toml(text: &str) -> Result<Self, ProfileError> {
        let profile: Self = toml::from_str(text)?;
        let rate = profile.sim.rate_deg_per_ms;
        if rate <= 0.0 || rate.is_nan() {
            return Err(ProfileError::InvalidRate(rate));
        }
        Ok(profile)
    }

    /// Load a profile from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Build the chassis this profile describes.
    pub fn chassis(&self) -> SimChassis {
        SimChassis::with_bumper(self.sim.rate_deg_per_ms, self.sim.bumper_script())
    }
}
