//! Drives a square patrol from a TOML profile, then runs forward until
//! the scripted wall stops the chassis.
//!
//! Run with `RUST_LOG=debug cargo run --example square_path` to see the
//! chassis commands under the maneuver log.

use hodos_core::motion::{Rover, TravelDirection};
use hodos_sim::{ConsoleDisplay, ProfileError, SimProfile};

const PROFILE: &str = include_str!("square_path.toml");

fn main() -> Result<(), ProfileError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let profile = SimProfile::from_toml(PROFILE)?;
    let mut rover = Rover::with_display(profile.chassis(), ConsoleDisplay, profile.drive);

    log::info!("starting at {:?}", rover.pose());
    let corners = [(0.0, 24.0), (-24.0, 24.0), (-24.0, 0.0), (0.0, 0.0)];
    for (x, y) in corners {
        rover.move_to_point(x, y);
        log::info!("corner ({}, {}): {:?}", x, y, rover.pose());
    }

    let stop = rover.drive_until_bump(TravelDirection::Forward);
    log::info!(
        "obstacle run: {:.2} rotations, hit = {}",
        stop.rotations,
        stop.hit_obstacle()
    );
    log::info!("finished at {:?}", rover.pose());

    let (chassis, _) = rover.release();
    log::info!("simulated time: {:.0} ms", chassis.elapsed_ms());
    Ok(())
}
