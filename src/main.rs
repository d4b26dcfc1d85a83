//! Solar Invaders - a solar-system flythrough with an arcade twist.
//!
//! Fly a ship through an animated solar system and clear the invader
//! formation looming above it.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod assets;
mod camera;
mod enemies;
mod flight;
mod orbits;
mod radar;
mod registry;
mod render;
mod time;
mod types;
mod ui;
mod weapon;

use assets::ModelLoadPlugin;
use camera::CameraPlugin;
use enemies::EnemyPlugin;
use flight::FlightPlugin;
use radar::RadarPlugin;
use registry::SceneRegistry;
use render::RenderPlugin;
use time::TimePlugin;
use types::{OrbitParameters, TickSet};
use ui::UiPlugin;
use weapon::WeaponPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SceneRegistry::default())
        .insert_resource(OrbitParameters::default())
        // Movement integrates before orbits reposition, camera trails last
        .configure_sets(
            Update,
            (TickSet::Movement, TickSet::Orbits, TickSet::CameraFollow).chain(),
        )
        // Add simulation plugins
        .add_plugins((
            TimePlugin,
            RenderPlugin,
            FlightPlugin,
            EnemyPlugin,
            WeaponPlugin,
            CameraPlugin,
            RadarPlugin,
            UiPlugin,
            ModelLoadPlugin,
        ))
        .run();
}
