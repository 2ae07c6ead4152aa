//! Tunable simulation settings.
//!
//! Fixed arcade rules (release limits, phase schedules, timeouts) live in
//! [`crate::constants`]; this struct holds what a host may reasonably change.

use std::time::Duration;

use glam::IVec2;

use crate::constants::{scoring, spawn, MOVE_STEP, STARTING_LIVES};
use crate::entity::ghost::Personality;
use crate::map::graph::TunnelExits;

/// The cell each ghost is placed on at level start and after being eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPoints {
    pub blinky: IVec2,
    pub pinky: IVec2,
    pub inky: IVec2,
    pub clyde: IVec2,
}

impl SpawnPoints {
    pub fn get(&self, personality: Personality) -> IVec2 {
        match personality {
            Personality::Blinky => self.blinky,
            Personality::Pinky => self.pinky,
            Personality::Inky => self.inky,
            Personality::Clyde => self.clyde,
        }
    }
}

impl Default for SpawnPoints {
    fn default() -> Self {
        Self {
            blinky: spawn::BLINKY,
            pinky: spawn::PINKY,
            inky: spawn::INKY,
            clyde: spawn::CLYDE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub tunnel_exits: TunnelExits,
    pub spawns: SpawnPoints,
    pub starting_lives: u8,
    /// Grid units travelled per resolved move.
    pub move_step: f32,
    pub power_duration: Duration,
    /// Energizers grant power only below this level.
    pub power_level_cutoff: u32,
    pub bonus_life_score: u32,
    /// Seed for player placement. `None` draws one from the operating system.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tunnel_exits: TunnelExits::default(),
            spawns: SpawnPoints::default(),
            starting_lives: STARTING_LIVES,
            move_step: MOVE_STEP,
            power_duration: scoring::POWER_DURATION,
            power_level_cutoff: scoring::POWER_LEVEL_CUTOFF,
            bonus_life_score: scoring::BONUS_LIFE_SCORE,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tunnel_exits(mut self, exits: TunnelExits) -> Self {
        self.tunnel_exits = exits;
        self
    }

    pub fn with_spawns(mut self, spawns: SpawnPoints) -> Self {
        self.spawns = spawns;
        self
    }

    pub fn with_starting_lives(mut self, lives: u8) -> Self {
        self.starting_lives = lives;
        self
    }

    pub fn with_move_step(mut self, step: f32) -> Self {
        self.move_step = step;
        self
    }
}
