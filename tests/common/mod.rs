//! Common helpers for integration tests.

use bevy::prelude::*;

use solar_invaders::enemies::{Invader, InvaderGrid};
use solar_invaders::flight::{ShipHeading, ShipTilt, Spaceship};

/// Headless app with MinimalPlugins only.
pub fn minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Spawn a ship entity at the given altitude with default heading.
pub fn spawn_ship(world: &mut World, altitude: f32) -> Entity {
    world
        .spawn((
            Spaceship,
            ShipHeading::default(),
            ShipTilt::default(),
            Transform::from_xyz(0.0, altitude, 0.0),
        ))
        .id()
}

/// Spawn an invader grid parent with one child per given local position.
pub fn spawn_grid(world: &mut World, slots: &[Vec3]) -> (Entity, Vec<Entity>) {
    let grid = world
        .spawn((InvaderGrid, Transform::default(), Visibility::default()))
        .id();

    let mut children = Vec::new();
    for (i, &slot) in slots.iter().enumerate() {
        let child = world
            .spawn((
                Invader {
                    col: i as i32,
                    row: 0,
                },
                Transform::from_translation(slot),
            ))
            .id();
        world.entity_mut(grid).add_child(child);
        children.push(child);
    }
    (grid, children)
}

/// Count entities matching a component filter.
pub fn count_with<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<C>>()
        .iter(app.world())
        .count()
}
