//! Flight controller: held-key state to ship pose deltas.
//!
//! The ship perpetually drifts forward along its heading; the keys only
//! steer, climb, and dive. Yaw accumulates and persists across frames,
//! while pitch/roll are cosmetic snaps that reset on key release.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::types::{
    CLIMB_STEP, FLIGHT_SPEED, INITIAL_YAW, PITCH_TILT, ROLL_TILT, TURN_RATE, TickSet,
};

/// Marker component for the player ship.
#[derive(Component)]
pub struct Spaceship;

/// Persistent heading state. Yaw freezes at its last value when the
/// turn keys are released; there is no spring-back.
#[derive(Component, Clone, Debug)]
pub struct ShipHeading {
    pub yaw: f32,
}

impl Default for ShipHeading {
    fn default() -> Self {
        Self { yaw: INITIAL_YAW }
    }
}

/// Cosmetic tilt. Snapped to fixed angles while keys are held, reset to
/// zero on release; never accumulated and never coupled to the heading.
#[derive(Component, Clone, Debug, Default)]
pub struct ShipTilt {
    pub pitch: f32,
    pub roll: f32,
}

/// Held-key state, mutated by key events and read every frame by the
/// movement integration step. Lives for the whole session.
#[derive(Resource, Clone, Debug, Default)]
pub struct MovementFlags {
    pub upward: bool,
    pub downward: bool,
    pub left: bool,
    pub right: bool,
}

/// Plugin providing keyboard flight controls.
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementFlags>().add_systems(
            Update,
            (read_movement_keys, integrate_movement)
                .chain()
                .in_set(TickSet::Movement),
        );
    }
}

/// Unit heading vector for a given yaw.
///
/// The ship model's forward axis is offset a quarter turn from its yaw,
/// so the heading leads the yaw by -PI/2.
pub fn heading_vector(yaw: f32) -> Vec3 {
    Vec3::new((yaw - FRAC_PI_2).sin(), 0.0, (yaw - FRAC_PI_2).cos())
}

/// Translate key events into movement flags and tilt snaps.
///
/// WASD and the arrow keys are duplicate bindings for the same logical
/// actions. A flag clears only when every binding for it is released.
fn read_movement_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut flags: ResMut<MovementFlags>,
    mut ships: Query<&mut ShipTilt, With<Spaceship>>,
) {
    const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
    const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
    const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
    const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];

    // Flags are tracked even before the ship model arrives, so movement
    // engages the moment it loads.
    update_flags(&keys, &mut flags, &UP, &DOWN, &LEFT, &RIGHT);

    let Ok(mut tilt) = ships.single_mut() else {
        return;
    };

    // Tilt snaps to a fixed angle while held, zero when released.
    tilt.roll = if flags.upward {
        -ROLL_TILT
    } else if flags.downward {
        ROLL_TILT
    } else {
        0.0
    };
    tilt.pitch = if flags.left {
        PITCH_TILT
    } else if flags.right {
        -PITCH_TILT
    } else {
        0.0
    };
}

fn update_flags(
    keys: &ButtonInput<KeyCode>,
    flags: &mut MovementFlags,
    up: &[KeyCode],
    down: &[KeyCode],
    left: &[KeyCode],
    right: &[KeyCode],
) {
    flags.upward = keys.any_pressed(up.iter().copied());
    flags.downward = keys.any_pressed(down.iter().copied());
    flags.left = keys.any_pressed(left.iter().copied());
    flags.right = keys.any_pressed(right.iter().copied());
}

/// Integrate ship movement for this frame.
///
/// Steps are fixed per frame rather than dt-scaled. Forward translation
/// is applied unconditionally: the ship is always flying, only its
/// heading is steerable.
pub fn integrate_movement(
    flags: Res<MovementFlags>,
    mut ships: Query<(&mut Transform, &mut ShipHeading, &ShipTilt), With<Spaceship>>,
) {
    let Ok((mut transform, mut heading, tilt)) = ships.single_mut() else {
        return;
    };

    if flags.left {
        heading.yaw += TURN_RATE;
    }
    if flags.right {
        heading.yaw -= TURN_RATE;
    }

    let forward = heading_vector(heading.yaw);
    transform.translation += forward * FLIGHT_SPEED;

    if flags.upward {
        transform.translation.y += CLIMB_STEP;
    }
    if flags.downward {
        transform.translation.y -= CLIMB_STEP;
    }

    transform.rotation = Quat::from_euler(EulerRot::YXZ, heading.yaw, tilt.pitch, tilt.roll);
}
