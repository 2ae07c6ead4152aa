//! Headless simulation core of a Pac-Man style maze chase.
//!
//! The maze is a set of axis-aligned lines ([`map`]); the player and ghosts sit at
//! fractional positions along them ([`entity`]). [`game::Game`] advances everything one
//! tick at a time using the rules in [`systems`].

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod map;
pub mod systems;

pub use crate::config::{SimulationConfig, SpawnPoints};
pub use crate::error::{GameError, GameResult};
pub use crate::game::Game;
pub use crate::input::Intents;
