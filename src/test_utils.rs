//! Test utilities shared by in-crate unit tests.

use bevy::prelude::*;

use crate::flight::{ShipHeading, ShipTilt, Spaceship};
use crate::types::SHIP_SPAWN_ALTITUDE;

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

/// Spawn a bare ship entity the way the model loader would, minus the
/// loaded scene itself.
pub fn spawn_test_ship(world: &mut World) -> Entity {
    world
        .spawn((
            Spaceship,
            ShipHeading::default(),
            ShipTilt::default(),
            Transform::from_xyz(0.0, SHIP_SPAWN_ALTITUDE, 0.0),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_app_updates() {
        let mut app = bevy_test::headless_app();
        app.update();
        app.update();
    }

    #[test]
    fn test_spawn_test_ship_has_flight_components() {
        let mut app = bevy_test::headless_app();
        let ship = spawn_test_ship(app.world_mut());
        assert!(app.world().get::<Spaceship>(ship).is_some());
        assert!(app.world().get::<ShipHeading>(ship).is_some());
    }
}
