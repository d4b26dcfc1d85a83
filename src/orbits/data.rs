//! Orbital element tables for the eight planets and the Moon.
//!
//! All values are stage units tuned for the flythrough, not astronomy.
//! Base radii are divided by the shared orbit scale at evaluation time;
//! speed factors are multiplied by the shared orbit velocity.

use thiserror::Error;

/// Identifier for the orbiting planets (the Sun sits at the origin and
/// the Moon is handled as a child of the Earth group).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    /// All planets in orbit order.
    pub const ALL: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }
}

/// Error raised when an orbital element record fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitConfigError {
    #[error("{body}: orbit radius must be strictly positive, got {radius}")]
    NonPositiveRadius { body: &'static str, radius: f32 },
    #[error("{body}: speed factor must not be negative, got {factor}")]
    NegativeSpeedFactor { body: &'static str, factor: f32 },
    #[error("{body}: bob rate must not be negative, got {rate}")]
    NegativeBobRate { body: &'static str, rate: f32 },
}

/// Validated positioning parameters for one orbiting body.
///
/// Every body's placement flows through this record, so a mistyped or
/// missing field is a construction-time error rather than a silent NaN
/// somewhere in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    pub id: PlanetId,
    /// Base orbit radius (divided by the shared orbit scale).
    pub orbit_radius: f32,
    /// Angular speed multiplier (multiplied by the shared orbit velocity).
    pub speed_factor: f32,
    /// Vertical bob rate. The bob reads raw elapsed time, not the
    /// velocity-scaled orbit angle.
    pub bob_rate: f32,
    /// Vertical bob amplitude.
    pub bob_amplitude: f32,
}

impl OrbitalElements {
    /// Check that the record describes a usable orbit.
    pub fn validate(&self) -> Result<(), OrbitConfigError> {
        let body = self.id.name();
        if self.orbit_radius <= 0.0 || !self.orbit_radius.is_finite() {
            return Err(OrbitConfigError::NonPositiveRadius {
                body,
                radius: self.orbit_radius,
            });
        }
        if self.speed_factor < 0.0 || !self.speed_factor.is_finite() {
            return Err(OrbitConfigError::NegativeSpeedFactor {
                body,
                factor: self.speed_factor,
            });
        }
        if self.bob_rate < 0.0 || !self.bob_rate.is_finite() {
            return Err(OrbitConfigError::NegativeBobRate {
                body,
                rate: self.bob_rate,
            });
        }
        Ok(())
    }
}

/// The Moon's base orbit radius around the Earth group center.
/// Like planet radii, it is divided by the shared orbit scale.
pub const MOON_ORBIT_RADIUS: f32 = 2.0;

/// The Moon's angular speed multiplier.
pub const MOON_SPEED_FACTOR: f32 = 0.5;

const fn elements(
    id: PlanetId,
    orbit_radius: f32,
    speed_factor: f32,
    bob_rate: f32,
) -> OrbitalElements {
    OrbitalElements {
        id,
        orbit_radius,
        speed_factor,
        bob_rate,
        bob_amplitude: 1.0,
    }
}

/// Orbital elements for all planets, inner to outer.
pub fn all_planets() -> [OrbitalElements; 8] {
    [
        elements(PlanetId::Mercury, 5.8, 1.0, 0.6),
        elements(PlanetId::Venus, 10.8, 0.9, 0.6),
        elements(PlanetId::Earth, 15.0, 0.7, 0.5),
        elements(PlanetId::Mars, 23.0, 0.5, 0.5),
        elements(PlanetId::Jupiter, 78.0, 0.3, 0.3),
        elements(PlanetId::Saturn, 143.0, 0.2, 0.2),
        elements(PlanetId::Uranus, 287.0, 0.1, 0.1),
        elements(PlanetId::Neptune, 450.0, 0.05, 0.05),
    ]
}

/// Look up the elements for one planet.
pub fn elements_for(id: PlanetId) -> OrbitalElements {
    // The table is total over PlanetId, so the scan always succeeds.
    all_planets()
        .into_iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| elements(id, 1.0, 0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_planets_validate() {
        for e in all_planets() {
            e.validate()
                .unwrap_or_else(|err| panic!("invalid elements: {err}"));
        }
    }

    #[test]
    fn test_table_covers_every_planet() {
        for &id in PlanetId::ALL {
            assert_eq!(elements_for(id).id, id);
        }
    }

    #[test]
    fn test_outer_planets_are_slower_and_wider() {
        let planets = all_planets();
        for pair in planets.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
            assert!(pair[0].speed_factor >= pair[1].speed_factor);
        }
    }

    #[test]
    fn test_validation_rejects_bad_records() {
        let mut bad = elements_for(PlanetId::Mercury);
        bad.orbit_radius = 0.0;
        assert!(matches!(
            bad.validate(),
            Err(OrbitConfigError::NonPositiveRadius { .. })
        ));

        let mut bad = elements_for(PlanetId::Venus);
        bad.speed_factor = -1.0;
        assert!(matches!(
            bad.validate(),
            Err(OrbitConfigError::NegativeSpeedFactor { .. })
        ));

        let mut bad = elements_for(PlanetId::Mars);
        bad.bob_rate = f32::NAN;
        assert!(bad.validate().is_err());
    }
}
