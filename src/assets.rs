//! Asynchronous model loading.
//!
//! The ship and the invader template load in the background; a poll
//! system spawns each the moment it is ready and tracks aggregate
//! progress for the loading indicator. A failed load is logged and
//! counted as settled: the demo keeps running with that entity absent.

use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::camera::CameraRig;
use crate::enemies::spawn_invader_grid;
use crate::flight::{ShipHeading, ShipTilt, Spaceship};
use crate::registry::{SceneKey, SceneRegistry};
use crate::types::SHIP_SPAWN_ALTITUDE;

/// Uniform scale applied to the ship model.
const SHIP_SCALE: f32 = 0.1;

/// Handles and settlement state for the two model loads.
#[derive(Resource)]
pub struct LoadTracker {
    ship: Handle<Scene>,
    invader: Handle<Scene>,
    ship_settled: bool,
    invader_settled: bool,
}

impl LoadTracker {
    /// Fraction of loads settled, for the loading indicator.
    pub fn progress(&self) -> f32 {
        let settled = self.ship_settled as u8 + self.invader_settled as u8;
        settled as f32 / 2.0
    }

    /// Whether every load has settled (successfully or not).
    pub fn complete(&self) -> bool {
        self.ship_settled && self.invader_settled
    }
}

/// Plugin providing model loading and load-driven spawning.
pub struct ModelLoadPlugin;

impl Plugin for ModelLoadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, begin_model_loads)
            .add_systems(Update, poll_model_loads);
    }
}

/// Kick off both scene loads.
fn begin_model_loads(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(LoadTracker {
        ship: asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/spaceship.glb")),
        invader: asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/invader.glb")),
        ship_settled: false,
        invader_settled: false,
    });
}

/// Watch the loads; spawn each object when ready and activate the
/// camera rig once everything has settled.
fn poll_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut tracker: ResMut<LoadTracker>,
    mut registry: ResMut<SceneRegistry>,
    mut rig: ResMut<CameraRig>,
) {
    if !tracker.ship_settled {
        match asset_server.load_state(&tracker.ship) {
            LoadState::Loaded => {
                spawn_ship(&mut commands, &mut registry, tracker.ship.clone());
                tracker.ship_settled = true;
            }
            LoadState::Failed(_) => {
                warn!("Ship model failed to load; flying without a ship");
                tracker.ship_settled = true;
            }
            _ => {}
        }
    }

    if !tracker.invader_settled {
        match asset_server.load_state(&tracker.invader) {
            LoadState::Loaded => {
                spawn_invader_grid(&mut commands, &mut registry, tracker.invader.clone());
                tracker.invader_settled = true;
            }
            LoadState::Failed(_) => {
                warn!("Invader model failed to load; no formation this run");
                tracker.invader_settled = true;
            }
            _ => {}
        }
    }

    if tracker.complete() && !rig.active {
        rig.active = true;
        info!("Load sequence settled; camera follow active");
    }
}

/// Spawn the player ship high above the orbital plane, with a small
/// hull light so the model reads against the dark backdrop.
fn spawn_ship(commands: &mut Commands, registry: &mut SceneRegistry, scene: Handle<Scene>) {
    let ship = commands
        .spawn((
            Spaceship,
            ShipHeading::default(),
            ShipTilt::default(),
            SceneRoot(scene),
            Transform::from_xyz(0.0, SHIP_SPAWN_ALTITUDE, 0.0)
                .with_scale(Vec3::splat(SHIP_SCALE)),
            Visibility::default(),
        ))
        .id();

    let hull_light = commands
        .spawn((
            PointLight {
                intensity: 10_000.0,
                range: 10.0,
                ..default()
            },
            Transform::from_xyz(1.0, 4.0, 2.0),
        ))
        .id();
    commands.entity(ship).add_child(hull_light);

    registry.register(SceneKey::Ship, ship);
    info!("Ship spawned at altitude {}", SHIP_SPAWN_ALTITUDE);
}
