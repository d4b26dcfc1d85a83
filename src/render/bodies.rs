//! Celestial body spawning.
//!
//! One parameterized assembly routine driven by the orbital element
//! table builds the whole system: emissive Sun, colored planet spheres,
//! the Earth group with its Moon, and Saturn's ring.

use bevy::prelude::*;

use crate::orbits::{all_planets, planet_position, OrbitalElements, PlanetId};
use crate::registry::{SceneKey, SceneRegistry};
use crate::types::{FlightClock, OrbitParameters};

/// Visual scale of the Sun sphere.
const SUN_SCALE: f32 = 1.4;

/// Component marking an entity whose translation is recomputed from the
/// orbit model every frame.
#[derive(Component, Clone, Debug)]
pub struct OrbitingBody {
    pub elements: OrbitalElements,
}

/// Marker for the Moon sphere (a child of the Earth group; its local
/// translation orbits the group center).
#[derive(Component)]
pub struct MoonBody;

/// Marker for the Sun.
#[derive(Component)]
pub struct SunBody;

/// Approximate surface color for a planet.
fn body_color(id: PlanetId) -> Color {
    match id {
        PlanetId::Mercury => Color::srgb(0.6, 0.6, 0.6),
        PlanetId::Venus => Color::srgb(0.9, 0.85, 0.7),
        PlanetId::Earth => Color::srgb(0.2, 0.5, 0.8),
        PlanetId::Mars => Color::srgb(0.8, 0.4, 0.2),
        PlanetId::Jupiter => Color::srgb(0.8, 0.7, 0.6),
        PlanetId::Saturn => Color::srgb(0.9, 0.85, 0.6),
        PlanetId::Uranus => Color::srgb(0.6, 0.8, 0.9),
        PlanetId::Neptune => Color::srgb(0.3, 0.5, 0.9),
    }
}

/// Sphere scale for a planet.
fn visual_scale(id: PlanetId) -> f32 {
    match id {
        PlanetId::Mercury => 0.1,
        PlanetId::Venus => 0.3,
        PlanetId::Earth => 0.3,
        PlanetId::Mars => 0.2,
        PlanetId::Jupiter => 3.5,
        PlanetId::Saturn => 3.0,
        PlanetId::Uranus => 1.4,
        PlanetId::Neptune => 3.5,
    }
}

/// Scale of the Moon sphere inside the Earth group.
const MOON_SCALE: f32 = 0.08;

fn planet_material(id: PlanetId, materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: body_color(id),
        metallic: 0.1,
        perceptual_roughness: 0.6,
        ..default()
    })
}

/// Spawn lighting, the Sun, and every planet from the element table.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<SceneRegistry>,
    clock: Res<FlightClock>,
    params: Res<OrbitParameters>,
) {
    // A broken element record should stop scene assembly loudly, not
    // place a body at a nonsense position.
    if let Err(err) = crate::orbits::validate_all() {
        error!("Orbital element table rejected: {err}");
        return;
    }

    let sphere = meshes.add(Sphere::new(1.0));

    // Sunlight from the origin plus a faint ambient fill.
    commands.spawn(PointLight {
        intensity: 40_000_000.0,
        range: 1000.0,
        shadows_enabled: false,
        ..default()
    });
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 60.0,
        ..default()
    });

    // The Sun glows on its own; it is not lit.
    let sun_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.85, 0.3),
        emissive: LinearRgba::rgb(8.0, 6.0, 2.0),
        unlit: true,
        ..default()
    });
    let sun = commands
        .spawn((
            SunBody,
            Mesh3d(sphere.clone()),
            MeshMaterial3d(sun_material),
            Transform::from_scale(Vec3::splat(SUN_SCALE)),
        ))
        .id();
    registry.register(SceneKey::Sun, sun);

    for elements in all_planets() {
        let id = elements.id;
        let start = planet_position(&elements, clock.elapsed, &params);

        let entity = match id {
            PlanetId::Earth => spawn_earth_group(
                &mut commands,
                &mut registry,
                &sphere,
                &mut materials,
                elements,
                start,
            ),
            PlanetId::Saturn => spawn_saturn_group(
                &mut commands,
                &mut meshes,
                &sphere,
                &mut materials,
                elements,
                start,
            ),
            _ => commands
                .spawn((
                    OrbitingBody { elements },
                    Mesh3d(sphere.clone()),
                    MeshMaterial3d(planet_material(id, &mut materials)),
                    Transform::from_translation(start).with_scale(Vec3::splat(visual_scale(id))),
                ))
                .id(),
        };

        registry.register(SceneKey::Planet(id), entity);
    }

    info!("Spawned the Sun and {} planets", all_planets().len());
}

/// The Earth is a group: planet sphere plus the orbiting Moon, so the
/// Moon inherits the group's heliocentric motion for free.
fn spawn_earth_group(
    commands: &mut Commands,
    registry: &mut SceneRegistry,
    sphere: &Handle<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    elements: OrbitalElements,
    start: Vec3,
) -> Entity {
    let group = commands
        .spawn((
            OrbitingBody { elements },
            Transform::from_translation(start),
            Visibility::default(),
        ))
        .id();

    let earth = commands
        .spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(planet_material(PlanetId::Earth, materials)),
            Transform::from_scale(Vec3::splat(visual_scale(PlanetId::Earth))),
        ))
        .id();

    let moon_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.7, 0.7),
        metallic: 0.1,
        perceptual_roughness: 0.6,
        ..default()
    });
    let moon = commands
        .spawn((
            MoonBody,
            Mesh3d(sphere.clone()),
            MeshMaterial3d(moon_material),
            Transform::from_xyz(1.0, 1.0, 1.0).with_scale(Vec3::splat(MOON_SCALE)),
        ))
        .id();

    commands.entity(group).add_children(&[earth, moon]);
    registry.register(SceneKey::Moon, moon);
    group
}

/// Saturn is a group: planet sphere plus a tilted, double-sided ring.
fn spawn_saturn_group(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    sphere: &Handle<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    elements: OrbitalElements,
    start: Vec3,
) -> Entity {
    let group = commands
        .spawn((
            OrbitingBody { elements },
            Transform::from_translation(start),
            Visibility::default(),
        ))
        .id();

    let planet = commands
        .spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(planet_material(PlanetId::Saturn, materials)),
            Transform::from_scale(Vec3::splat(visual_scale(PlanetId::Saturn))),
        ))
        .id();

    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.78, 0.6),
        metallic: 0.1,
        perceptual_roughness: 0.6,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let ring = commands
        .spawn((
            Mesh3d(meshes.add(Annulus::new(3.7, 5.3))),
            MeshMaterial3d(ring_material),
            Transform::from_xyz(0.0, -0.2, 0.0)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::PI * 0.4)),
        ))
        .id();

    commands.entity(group).add_children(&[planet, ring]);
    group
}
