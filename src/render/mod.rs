//! Scene construction and per-frame visual state.

pub mod bodies;
pub mod sync;

use bevy::prelude::*;

use self::bodies::spawn_solar_system;
use self::sync::sync_orbit_positions;
use crate::types::TickSet;

pub use self::bodies::{MoonBody, OrbitingBody, SunBody};

/// Plugin aggregating scene spawning and orbit position sync.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system)
            .add_systems(Update, sync_orbit_positions.in_set(TickSet::Orbits));
    }
}
