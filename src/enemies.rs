//! Invader grid: a 10x10 formation of enemy instances.
//!
//! The grid is one parent entity owning one child per invader, all cloned
//! from a single loaded scene template. The formation descends slowly
//! while it exists; individual invaders are removed by laser hits, and
//! the parent goes away exactly when its last child does.

use bevy::prelude::*;

use crate::registry::{SceneKey, SceneRegistry};

/// Columns in the invader formation.
pub const GRID_COLS: i32 = 10;

/// Rows in the invader formation.
pub const GRID_ROWS: i32 = 10;

/// Vertical descent of the whole formation per frame.
pub const GRID_DESCENT_PER_FRAME: f32 = 0.01;

/// Uniform scale applied to each invader instance.
pub const INVADER_SCALE: f32 = 0.04;

/// Radius of the sphere used for laser hit tests against one invader.
pub const INVADER_HIT_RADIUS: f32 = 1.5;

/// Marker component for the grid parent entity.
#[derive(Component)]
pub struct InvaderGrid;

/// One invader instance, identified by its formation slot.
#[derive(Component, Clone, Copy, Debug)]
pub struct Invader {
    pub col: i32,
    pub row: i32,
}

/// Plugin providing grid behavior (spawning is driven by asset loading).
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, descend_grid);
    }
}

/// Formation-local position for a grid slot.
///
/// Columns spread around the origin; rows start well above the orbital
/// plane so the formation looms over the planets.
pub fn grid_slot_position(col: i32, row: i32) -> Vec3 {
    Vec3::new((col - 4) as f32 * 5.0, (row + 10) as f32 * 5.0, 0.0)
}

/// World position of one invader given its grid parent's transform.
///
/// The grid never rotates, so the composition is a scale plus offset.
pub fn invader_world_position(grid: &Transform, invader: &Transform) -> Vec3 {
    grid.translation + invader.translation * grid.scale
}

/// Spawn the full formation as children of a fresh grid parent.
///
/// `template` is the loaded enemy scene; every slot gets its own clone.
/// The parent is registered so the weapon and radar can find it.
pub fn spawn_invader_grid(
    commands: &mut Commands,
    registry: &mut SceneRegistry,
    template: Handle<Scene>,
) -> Entity {
    let grid = commands
        .spawn((InvaderGrid, Transform::default(), Visibility::default()))
        .id();

    for col in 0..GRID_COLS {
        for row in 0..GRID_ROWS {
            let child = commands
                .spawn((
                    Invader { col, row },
                    SceneRoot(template.clone()),
                    Transform::from_translation(grid_slot_position(col, row))
                        .with_scale(Vec3::splat(INVADER_SCALE)),
                    Visibility::default(),
                ))
                .id();
            commands.entity(grid).add_child(child);
        }
    }

    registry.register(SceneKey::InvaderGrid, grid);
    info!("Spawned {}x{} invader formation", GRID_COLS, GRID_ROWS);
    grid
}

/// Lower the whole formation a fixed step per frame while it exists.
fn descend_grid(mut grids: Query<&mut Transform, With<InvaderGrid>>) {
    let Ok(mut transform) = grids.single_mut() else {
        return;
    };
    transform.translation.y -= GRID_DESCENT_PER_FRAME;
}
