//! Scene registry: typed handles for objects the per-frame tick consumes.
//!
//! Ship and invader models arrive asynchronously, so any tick may run
//! before they exist. Consumers look objects up here and treat a missing
//! entry as "feature not yet active", never as an error.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::orbits::PlanetId;

/// Typed key for scene objects tracked across systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Sun,
    Planet(PlanetId),
    Moon,
    Ship,
    InvaderGrid,
}

/// Resource mapping scene keys to live entities.
#[derive(Resource, Default)]
pub struct SceneRegistry {
    entries: HashMap<SceneKey, Entity>,
}

impl SceneRegistry {
    /// Register an entity under a key, replacing any previous entry.
    pub fn register(&mut self, key: SceneKey, entity: Entity) {
        self.entries.insert(key, entity);
    }

    /// Look up an entity. `None` means the object has not loaded yet
    /// (or has been removed).
    pub fn get(&self, key: SceneKey) -> Option<Entity> {
        self.entries.get(&key).copied()
    }

    /// Whether a key currently has a registered entity.
    pub fn contains(&self, key: SceneKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Remove a key, returning the entity it pointed at.
    pub fn unregister(&mut self, key: SceneKey) -> Option<Entity> {
        self.entries.remove(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entries_are_none() {
        let registry = SceneRegistry::default();
        assert_eq!(registry.get(SceneKey::Ship), None);
        assert!(!registry.contains(SceneKey::Sun));
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SceneRegistry::default();
        let e = Entity::from_raw_u32(7).unwrap();
        registry.register(SceneKey::Planet(PlanetId::Venus), e);
        assert_eq!(registry.get(SceneKey::Planet(PlanetId::Venus)), Some(e));
        assert!(registry.contains(SceneKey::Planet(PlanetId::Venus)));
    }

    #[test]
    fn test_unregister_clears_entry() {
        let mut registry = SceneRegistry::default();
        let e = Entity::from_raw_u32(3).unwrap();
        registry.register(SceneKey::InvaderGrid, e);
        assert_eq!(registry.unregister(SceneKey::InvaderGrid), Some(e));
        assert_eq!(registry.get(SceneKey::InvaderGrid), None);
    }

    #[test]
    fn test_register_replaces_previous_entry() {
        let mut registry = SceneRegistry::default();
        registry.register(SceneKey::Ship, Entity::from_raw_u32(1).unwrap());
        registry.register(SceneKey::Ship, Entity::from_raw_u32(2).unwrap());
        assert_eq!(registry.get(SceneKey::Ship), Some(Entity::from_raw_u32(2).unwrap()));
    }
}
