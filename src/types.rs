//! Core types and tuning constants for the flythrough.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_6, PI};

/// System sets for ordering the per-frame tick.
///
/// Movement integration must run before camera follow so the camera
/// trails the ship pose of the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Flight controller movement integration (runs first)
    Movement,
    /// Orbit position recomputation
    Orbits,
    /// Camera follow (runs after movement)
    CameraFollow,
}

/// Tuning constants (render units, radians, frames)

/// Forward speed of the ship per frame. Applied every frame along the
/// current heading whether or not a key is held.
pub const FLIGHT_SPEED: f32 = 0.2;

/// Yaw change per frame while a turn key is held.
pub const TURN_RATE: f32 = 0.03;

/// Vertical step per frame while a climb/dive key is held.
pub const CLIMB_STEP: f32 = 0.2;

/// Cosmetic pitch snap while turning (radians).
pub const PITCH_TILT: f32 = PI / 12.0;

/// Cosmetic roll snap while climbing or diving (radians).
pub const ROLL_TILT: f32 = FRAC_PI_6;

/// Initial ship yaw. The model faces backwards, so the ship starts
/// pointed away from the camera's default view direction.
pub const INITIAL_YAW: f32 = PI;

/// Altitude the ship spawns at once its model finishes loading.
pub const SHIP_SPAWN_ALTITUDE: f32 = 40.0;

/// Lowest orbit scale the configuration boundary will accept.
/// Orbit radii are divided by the scale, so it must stay strictly positive.
pub const MIN_ORBIT_SCALE: f32 = 0.1;

/// Shared, user-adjustable orbit knobs.
///
/// Every body's position computation reads (never owns) these two values.
/// The scale is clamped here, at the configuration boundary, so the orbit
/// model itself never has to guard against division by zero.
#[derive(Resource, Clone, Debug)]
pub struct OrbitParameters {
    orbit_scale: f32,
    pub orbit_velocity: f32,
}

impl Default for OrbitParameters {
    fn default() -> Self {
        Self {
            orbit_scale: 1.2,
            orbit_velocity: 0.1,
        }
    }
}

impl OrbitParameters {
    /// Create parameters with the scale clamped to the allowed minimum.
    pub fn new(orbit_scale: f32, orbit_velocity: f32) -> Self {
        Self {
            orbit_scale: orbit_scale.max(MIN_ORBIT_SCALE),
            orbit_velocity,
        }
    }

    /// Current orbit scale (always >= `MIN_ORBIT_SCALE`).
    pub fn orbit_scale(&self) -> f32 {
        self.orbit_scale
    }

    /// Set the orbit scale, clamping away zero and negative values.
    pub fn set_orbit_scale(&mut self, scale: f32) {
        self.orbit_scale = scale.max(MIN_ORBIT_SCALE);
    }
}

/// Elapsed wall-clock time since startup, in seconds.
///
/// The orbit model is a stateless function of this value: positions are
/// recomputed fully each frame, never integrated, so no drift accumulates.
#[derive(Resource, Clone, Debug, Default)]
pub struct FlightClock {
    pub elapsed: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_match_panel_defaults() {
        let params = OrbitParameters::default();
        assert_eq!(params.orbit_scale(), 1.2);
        assert_eq!(params.orbit_velocity, 0.1);
    }

    #[test]
    fn test_orbit_scale_clamped_at_boundary() {
        let mut params = OrbitParameters::default();
        params.set_orbit_scale(0.0);
        assert!(params.orbit_scale() >= MIN_ORBIT_SCALE);

        params.set_orbit_scale(-3.0);
        assert!(params.orbit_scale() >= MIN_ORBIT_SCALE);

        params.set_orbit_scale(2.5);
        assert_eq!(params.orbit_scale(), 2.5);
    }

    #[test]
    fn test_constructor_clamps_scale() {
        let params = OrbitParameters::new(-1.0, 0.5);
        assert!(params.orbit_scale() >= MIN_ORBIT_SCALE);
        assert_eq!(params.orbit_velocity, 0.5);
    }
}
