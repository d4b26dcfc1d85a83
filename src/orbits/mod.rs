//! Orbit model: pure position functions for the celestial bodies.
//!
//! Positions are a stateless function of elapsed time and the two shared
//! knobs (orbit scale, orbit velocity). Nothing here is integrated frame
//! to frame, so reordering or skipping frames cannot accumulate drift.
//!
//! Coordinate frame: Y-up, orbits in the XZ plane around the origin.

pub mod data;

#[cfg(test)]
mod proptest_orbits;

use bevy::prelude::*;

pub use data::{
    all_planets, elements_for, MOON_ORBIT_RADIUS, MOON_SPEED_FACTOR, OrbitConfigError,
    OrbitalElements, PlanetId,
};

use crate::types::OrbitParameters;

/// Compute a planet's position at the given elapsed time.
///
/// The orbit angle advances with the velocity knob; the radius shrinks
/// with the scale knob. The vertical bob reads raw elapsed time so it
/// stays gentle even at high orbit velocities.
///
/// The scale knob is clamped strictly positive at the configuration
/// boundary (`OrbitParameters`), so no division guard is needed here.
pub fn planet_position(elements: &OrbitalElements, t: f32, params: &OrbitParameters) -> Vec3 {
    let angle = t * elements.speed_factor * params.orbit_velocity;
    let radius = elements.orbit_radius / params.orbit_scale();
    Vec3::new(
        angle.cos() * radius,
        (t * elements.bob_rate).sin() * elements.bob_amplitude,
        angle.sin() * radius,
    )
}

/// Compute the Moon's position relative to the Earth group center.
///
/// The Moon rides the Earth group, adding its own faster, tighter orbit
/// on top of the group's heliocentric position.
pub fn moon_local_position(t: f32, params: &OrbitParameters) -> Vec3 {
    let angle = t * MOON_SPEED_FACTOR * params.orbit_velocity;
    let radius = MOON_ORBIT_RADIUS / params.orbit_scale();
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Validate the whole element table.
///
/// Called once at startup; a broken record aborts scene assembly instead
/// of placing a body at a nonsense position.
pub fn validate_all() -> Result<(), OrbitConfigError> {
    for elements in all_planets() {
        elements.validate()?;
    }
    Ok(())
}
