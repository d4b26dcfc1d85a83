//! Weapon system: laser fire, ray hit-testing, and projectile volleys.
//!
//! Firing casts a ray from the ship along its heading, removes the
//! nearest intersected invader (if any), and always spawns exactly one
//! projectile. At most one volley is ever in flight: fire requests are
//! ignored while a previous volley's projectiles are still live. The
//! volley self-destructs after a fixed delay, or immediately when an
//! explicit clear is requested.

use bevy::prelude::*;

use crate::enemies::{invader_world_position, Invader, InvaderGrid, INVADER_HIT_RADIUS};
use crate::flight::{heading_vector, ShipHeading, Spaceship};
use crate::registry::{SceneKey, SceneRegistry};

/// Maximum range of the laser ray.
pub const LASER_RANGE: f32 = 500.0;

/// Projectile travel per frame along its fixed direction.
pub const LASER_SPEED: f32 = 2.0;

/// Wall-clock lifetime of a volley before it self-clears, in seconds.
pub const VOLLEY_LIFETIME_SECS: f32 = 2.0;

/// Visual radius of the projectile bolt.
pub const PROJECTILE_RADIUS: f32 = 0.2;

/// Request to fire the laser.
#[derive(Message, Default)]
pub struct FireEvent;

/// Request to clear the current volley immediately.
#[derive(Message, Default)]
pub struct ClearVolleyEvent;

/// Notification that a laser was fired (consumed by the audio system).
#[derive(Message, Default)]
pub struct LaserFired;

/// A projectile in flight. Position lives on the Transform; the
/// direction is fixed at spawn time.
#[derive(Component, Clone, Debug)]
pub struct Projectile {
    pub direction: Vec3,
}

/// Countdown until the live volley self-destructs.
#[derive(Resource, Default)]
pub struct VolleyTimer {
    timer: Option<Timer>,
}

impl VolleyTimer {
    fn start(&mut self) {
        self.timer = Some(Timer::from_seconds(VOLLEY_LIFETIME_SECS, TimerMode::Once));
    }

    fn clear(&mut self) {
        self.timer = None;
    }
}

/// Plugin providing laser fire, projectile advancement, and volley expiry.
pub struct WeaponPlugin;

impl Plugin for WeaponPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VolleyTimer>()
            .add_message::<FireEvent>()
            .add_message::<ClearVolleyEvent>()
            .add_message::<LaserFired>()
            .add_systems(
                Update,
                (
                    weapon_keys,
                    fire_laser,
                    advance_projectiles,
                    expire_volley,
                    clear_volley,
                    play_laser_audio,
                ),
            );
    }
}

/// Distance along a ray to its first intersection with a sphere.
///
/// Returns `None` when the ray misses or the sphere is behind the origin.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    if along < 0.0 {
        return None;
    }
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    // First intersection; if the origin is inside the sphere, the exit point.
    let t = along - half_chord;
    Some(if t >= 0.0 { t } else { along + half_chord })
}

/// Find the nearest target intersected by the ray, within `max_range`.
///
/// Candidates are re-sorted by distance here rather than trusting any
/// ordering of the input.
pub fn nearest_hit(
    origin: Vec3,
    direction: Vec3,
    max_range: f32,
    targets: impl IntoIterator<Item = (Entity, Vec3, f32)>,
) -> Option<(Entity, f32)> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, center, radius) in targets {
        let Some(distance) = ray_sphere_distance(origin, direction, center, radius) else {
            continue;
        };
        if distance > max_range {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }
    best
}

/// Map the fire key to weapon events.
///
/// Space press fires; space release clears the volley early.
fn weapon_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut fire_events: MessageWriter<FireEvent>,
    mut clear_events: MessageWriter<ClearVolleyEvent>,
) {
    if keys.just_pressed(KeyCode::Space) {
        fire_events.write(FireEvent);
    }
    if keys.just_released(KeyCode::Space) {
        clear_events.write(ClearVolleyEvent);
    }
}

/// Handle fire requests.
///
/// No-ops when no ship is loaded or a volley is still live. Otherwise
/// removes the nearest invader hit by the ray (and the grid parent when
/// the formation empties) and spawns one projectile, hit or miss.
pub fn fire_laser(
    mut commands: Commands,
    mut fire_events: MessageReader<FireEvent>,
    mut laser_events: MessageWriter<LaserFired>,
    ships: Query<(&Transform, &ShipHeading), With<Spaceship>>,
    live_projectiles: Query<(), With<Projectile>>,
    grids: Query<(Entity, &Transform), With<InvaderGrid>>,
    invaders: Query<(Entity, &Transform), With<Invader>>,
    mut registry: ResMut<SceneRegistry>,
    mut volley: ResMut<VolleyTimer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if fire_events.is_empty() {
        return;
    }
    fire_events.clear();

    // No ship yet: the weapon is not active.
    let Ok((ship_transform, heading)) = ships.single() else {
        return;
    };

    // One live volley at a time.
    if !live_projectiles.is_empty() {
        return;
    }

    let origin = ship_transform.translation;
    let direction = heading_vector(heading.yaw);

    // Hit-test every invader instance against the ray. The grid parent
    // may not exist (all cleared, or template still loading).
    let remaining = invaders.iter().count();
    if let Ok((grid_entity, grid_transform)) = grids.single() {
        let targets = invaders.iter().map(|(entity, transform)| {
            (
                entity,
                invader_world_position(grid_transform, transform),
                INVADER_HIT_RADIUS,
            )
        });

        if let Some((struck, distance)) = nearest_hit(origin, direction, LASER_RANGE, targets) {
            commands.entity(struck).despawn();
            info!("Invader down at range {:.1} ({} left)", distance, remaining - 1);

            if remaining == 1 {
                // That was the last one: the formation parent goes too.
                commands.entity(grid_entity).despawn();
                registry.unregister(SceneKey::InvaderGrid);
                info!("Invader formation cleared");
            }
        }
    }

    // Exactly one projectile per fire action, hit or miss.
    let mesh = meshes.add(Sphere::new(PROJECTILE_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.3, 0.2),
        emissive: LinearRgba::rgb(8.0, 1.5, 0.5),
        ..default()
    });
    commands.spawn((
        Projectile { direction },
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(origin),
    ));
    volley.start();

    laser_events.write(LaserFired);
}

/// Advance every in-flight projectile along its fixed direction.
pub fn advance_projectiles(mut projectiles: Query<(&mut Transform, &Projectile)>) {
    for (mut transform, projectile) in projectiles.iter_mut() {
        transform.translation += projectile.direction * LASER_SPEED;
    }
}

/// Self-destruct the volley after its fixed lifetime.
fn expire_volley(
    mut commands: Commands,
    time: Res<Time>,
    mut volley: ResMut<VolleyTimer>,
    projectiles: Query<Entity, With<Projectile>>,
) {
    let Some(timer) = volley.timer.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if !timer.is_finished() {
        return;
    }
    for entity in projectiles.iter() {
        commands.entity(entity).despawn();
    }
    volley.clear();
}

/// Remove the volley immediately on an explicit clear request.
pub fn clear_volley(
    mut commands: Commands,
    mut events: MessageReader<ClearVolleyEvent>,
    mut volley: ResMut<VolleyTimer>,
    projectiles: Query<Entity, With<Projectile>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    for entity in projectiles.iter() {
        commands.entity(entity).despawn();
    }
    volley.clear();
}

/// Fire-and-forget laser sound.
///
/// Kept separate from `fire_laser` so audio problems (no device, missing
/// asset) can never block the weapon itself; Bevy logs and drops the
/// playback on failure.
fn play_laser_audio(
    mut commands: Commands,
    mut events: MessageReader<LaserFired>,
    asset_server: Res<AssetServer>,
) {
    for _ in events.read() {
        commands.spawn((
            AudioPlayer::new(asset_server.load("sounds/laser.ogg")),
            PlaybackSettings::DESPAWN,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_sphere_ahead() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::new(10.0, 0.0, 0.0), 1.0);
        assert_relative_eq!(d.unwrap(), 9.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_sphere_behind() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::new(-10.0, 0.0, 0.0), 1.0);
        assert!(d.is_none());
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::new(10.0, 5.0, 0.0), 1.0);
        assert!(d.is_none());
    }

    #[test]
    fn test_nearest_hit_resorts_by_distance() {
        let far = Entity::from_raw_u32(1).unwrap();
        let near = Entity::from_raw_u32(2).unwrap();
        // Deliberately pass the farther target first.
        let targets = vec![
            (far, Vec3::new(30.0, 0.0, 0.0), 1.0),
            (near, Vec3::new(10.0, 0.0, 0.0), 1.0),
        ];
        let (hit, distance) = nearest_hit(Vec3::ZERO, Vec3::X, 100.0, targets).unwrap();
        assert_eq!(hit, near);
        assert_relative_eq!(distance, 9.0, epsilon = 1e-5);
    }

    #[test]
    fn test_nearest_hit_respects_max_range() {
        let target = Entity::from_raw_u32(1).unwrap();
        let targets = vec![(target, Vec3::new(600.0, 0.0, 0.0), 1.0)];
        assert!(nearest_hit(Vec3::ZERO, Vec3::X, LASER_RANGE, targets).is_none());
    }

    #[test]
    fn test_nearest_hit_empty_targets() {
        assert!(nearest_hit(Vec3::ZERO, Vec3::X, LASER_RANGE, Vec::new()).is_none());
    }
}
