//! Clock advancement for the orbit model.
//!
//! The flight clock is the single elapsed-time source every orbit
//! computation reads. Keeping it a resource (instead of reading
//! `Time` directly) lets tests drive it to arbitrary values.

use bevy::prelude::*;

use crate::types::FlightClock;

/// Plugin providing clock advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlightClock>()
            .add_systems(Update, advance_clock);
    }
}

/// Advance the flight clock by real elapsed time.
fn advance_clock(mut clock: ResMut<FlightClock>, time: Res<Time>) {
    clock.elapsed += time.delta_secs();
}
