//! Property-based tests for the orbit model using proptest.
//!
//! These verify determinism, continuity in time, and the inverse
//! relationship between orbit scale and orbit radius across a wide
//! range of knob settings.

use proptest::prelude::*;

use super::{all_planets, planet_position};
use crate::types::OrbitParameters;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The same inputs always produce the same position.
    #[test]
    fn prop_position_deterministic(
        t in 0.0f32..10_000.0,
        scale in 1.0f32..5.0,
        velocity in 0.1f32..10.0,
    ) {
        let params = OrbitParameters::new(scale, velocity);
        for elements in all_planets() {
            let a = planet_position(&elements, t, &params);
            let b = planet_position(&elements, t, &params);
            prop_assert_eq!(a, b);
        }
    }

    /// Positions are continuous in t: a small time step moves a body by
    /// at most (angular rate * radius + bob rate) * dt, up to rounding.
    #[test]
    fn prop_position_continuous_in_time(
        t in 0.0f32..1_000.0,
        scale in 1.0f32..5.0,
        velocity in 0.1f32..10.0,
    ) {
        let dt = 1e-3;
        let params = OrbitParameters::new(scale, velocity);
        for elements in all_planets() {
            let before = planet_position(&elements, t, &params);
            let after = planet_position(&elements, t + dt, &params);

            let radius = elements.orbit_radius / params.orbit_scale();
            let max_step = (elements.speed_factor * velocity * radius
                + elements.bob_rate * elements.bob_amplitude)
                * dt;

            let moved = (after - before).length();
            prop_assert!(
                moved <= max_step * 1.5 + 1e-3,
                "{:?} jumped {} (bound {}) at t={}",
                elements.id, moved, max_step, t
            );
        }
    }

    /// Doubling the orbit scale halves every body's orbital radius while
    /// leaving the orbit angle untouched.
    #[test]
    fn prop_scale_inversely_scales_radius(
        t in 0.0f32..1_000.0,
        scale in 1.0f32..2.5,
        velocity in 0.1f32..10.0,
    ) {
        let near = OrbitParameters::new(scale, velocity);
        let far = OrbitParameters::new(scale * 2.0, velocity);
        for elements in all_planets() {
            let a = planet_position(&elements, t, &near);
            let b = planet_position(&elements, t, &far);

            let ra = (a.x * a.x + a.z * a.z).sqrt();
            let rb = (b.x * b.x + b.z * b.z).sqrt();
            prop_assert!(
                (rb - ra / 2.0).abs() < ra.max(1.0) * 1e-4,
                "{:?}: radius {} did not halve to {}",
                elements.id, ra, rb
            );
            // Same angle: the planar components stay parallel.
            let cross = a.x * b.z - a.z * b.x;
            prop_assert!(cross.abs() < ra * rb * 1e-4);
        }
    }
}
