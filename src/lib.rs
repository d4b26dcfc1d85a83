//! Solar Invaders - a solar-system flythrough with an arcade twist.
//!
//! A library crate exposing the simulation components for testing and
//! integration purposes.

pub mod assets;
pub mod camera;
pub mod enemies;
pub mod flight;
pub mod orbits;
pub mod radar;
pub mod registry;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;
pub mod weapon;

#[cfg(test)]
pub mod test_utils;
