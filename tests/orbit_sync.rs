//! Orbit position sync tests: transforms follow the pure orbit model.

mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;

use common::minimal_app;
use solar_invaders::orbits::{
    elements_for, moon_local_position, planet_position, PlanetId,
};
use solar_invaders::render::sync::sync_orbit_positions;
use solar_invaders::render::{MoonBody, OrbitingBody};
use solar_invaders::types::{FlightClock, OrbitParameters};

fn sync_app(elapsed: f32, params: OrbitParameters) -> App {
    let mut app = minimal_app();
    app.insert_resource(FlightClock { elapsed })
        .insert_resource(params)
        .add_systems(Update, sync_orbit_positions);
    app
}

#[test]
fn planet_transforms_match_the_orbit_model() {
    let params = OrbitParameters::new(1.2, 0.4);
    let mut app = sync_app(25.0, params.clone());

    let mars = app
        .world_mut()
        .spawn((
            OrbitingBody {
                elements: elements_for(PlanetId::Mars),
            },
            Transform::default(),
        ))
        .id();

    app.update();

    let expected = planet_position(&elements_for(PlanetId::Mars), 25.0, &params);
    let actual = app.world().get::<Transform>(mars).unwrap().translation;
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-5);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-5);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-5);
}

#[test]
fn sync_overwrites_rather_than_integrates() {
    let params = OrbitParameters::new(1.0, 1.0);
    let mut app = sync_app(10.0, params.clone());

    // Start the body somewhere nonsensical; one sync must fully correct it.
    let venus = app
        .world_mut()
        .spawn((
            OrbitingBody {
                elements: elements_for(PlanetId::Venus),
            },
            Transform::from_xyz(9999.0, -9999.0, 0.0),
        ))
        .id();

    app.update();

    let expected = planet_position(&elements_for(PlanetId::Venus), 10.0, &params);
    let actual = app.world().get::<Transform>(venus).unwrap().translation;
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-4);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-4);
}

#[test]
fn moon_local_transform_orbits_the_group_center() {
    let params = OrbitParameters::new(1.5, 0.7);
    let mut app = sync_app(42.0, params.clone());

    let moon = app
        .world_mut()
        .spawn((MoonBody, Transform::default()))
        .id();

    app.update();

    let expected = moon_local_position(42.0, &params);
    let actual = app.world().get::<Transform>(moon).unwrap().translation;
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-5);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-5);
}
