//! Host-side simulation for the hodos motion controller
//!
//! Runs the unmodified `no_std` controller against a kinematic chassis
//! model. Simulated time passes only through the chassis delay calls, so
//! blocking waits and bumper polling behave exactly as they do against
//! hardware, with no real sleeping. Profiles bundling drive geometry and
//! model parameters load from TOML.

pub mod chassis;
pub mod display;
pub mod profile;

pub use chassis::{BumperScript, SimChassis};
pub use display::ConsoleDisplay;
pub use profile::{ProfileError, SimParams, SimProfile};
