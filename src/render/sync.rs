//! Orbit position synchronization.
//!
//! Recomputes every orbiting body's translation from the orbit model
//! each frame. Positions are a pure function of the clock and the two
//! shared knobs, so this is a full overwrite, never an increment.

use bevy::prelude::*;

use crate::orbits::{moon_local_position, planet_position};
use crate::render::bodies::{MoonBody, OrbitingBody};
use crate::types::{FlightClock, OrbitParameters};

/// Reposition planets (and the Moon within its group) from elapsed time.
pub fn sync_orbit_positions(
    clock: Res<FlightClock>,
    params: Res<OrbitParameters>,
    mut planets: Query<(&mut Transform, &OrbitingBody), Without<MoonBody>>,
    mut moons: Query<&mut Transform, With<MoonBody>>,
) {
    for (mut transform, body) in planets.iter_mut() {
        transform.translation = planet_position(&body.elements, clock.elapsed, &params);
    }

    // The Moon's Transform is local to the Earth group, so this composes
    // with the group's heliocentric position automatically.
    for mut transform in moons.iter_mut() {
        transform.translation = moon_local_position(clock.elapsed, &params);
    }
}
