//! Hardware abstraction traits
//!
//! These traits define the interface between the motion controller
//! and chassis-specific implementations.

pub mod chassis;
pub mod display;

pub use chassis::{BumpPort, Chassis, Wheel};
pub use display::{DisplayError, NullDisplay, StatusDisplay};
