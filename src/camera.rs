//! Third-person trailing camera.
//!
//! Each frame the camera chases a fixed offset behind and above the
//! ship, closing a fraction of the remaining distance (exponential
//! smoothing), then turns to face the ship with a half-turn correction
//! for the model's backward-facing default orientation.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::flight::Spaceship;
use crate::types::TickSet;

/// Local offset of the desired camera position relative to the ship.
pub const FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 1.0, -1.0);

/// Fraction of the remaining distance closed per frame.
pub const FOLLOW_LERP: f32 = 0.1;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Follow activation flag, set once the initial load sequence settles.
/// Before that the camera holds its spawn pose.
#[derive(Resource, Default)]
pub struct CameraRig {
    pub active: bool,
}

/// Plugin providing the camera and follow behavior.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_ship.in_set(TickSet::CameraFollow));
    }
}

/// Spawn the main perspective camera overlooking the inner system.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 50.0, 60.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Desired world-space camera position for a given ship pose.
///
/// The local offset is rotated by the ship's orientation, then swung a
/// quarter turn about Y to sit behind the model's actual tail.
pub fn desired_camera_position(ship: &Transform) -> Vec3 {
    let offset = Quat::from_axis_angle(Vec3::Y, -FRAC_PI_2) * (ship.rotation * FOLLOW_OFFSET);
    ship.translation + offset
}

/// Move one smoothing step toward the target position.
pub fn follow_step(current: Vec3, desired: Vec3) -> Vec3 {
    current.lerp(desired, FOLLOW_LERP)
}

/// Chase the ship once the rig is active and a ship exists.
fn follow_ship(
    rig: Res<CameraRig>,
    ships: Query<&Transform, (With<Spaceship>, Without<MainCamera>)>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    if !rig.active {
        return;
    }
    let Ok(ship) = ships.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    camera.translation = follow_step(camera.translation, desired_camera_position(ship));

    // Face the ship, then half-turn: the ship model points backwards.
    camera.look_at(ship.translation, Vec3::Y);
    camera.rotate_local_y(PI);
}
