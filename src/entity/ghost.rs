//! Ghost state: personality, behavior mode and the house release counter.

use std::ops::{Index, IndexMut};

use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

use crate::entity::location::LocationInfo;
use crate::entity::Entity;
use crate::map::direction::Direction;
use crate::systems::counter::DotCounter;

/// The four classic ghosts, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Personality {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl Personality {
    /// The ghosts that start each level and life inside the house, in preference order.
    pub const HOUSE: [Personality; 3] = [Personality::Pinky, Personality::Inky, Personality::Clyde];

    /// Release preference order. An eaten Blinky waits behind the others.
    pub const RELEASE_ORDER: [Personality; 4] = [
        Personality::Pinky,
        Personality::Inky,
        Personality::Clyde,
        Personality::Blinky,
    ];

    pub const fn index(self) -> usize {
        match self {
            Personality::Blinky => 0,
            Personality::Pinky => 1,
            Personality::Inky => 2,
            Personality::Clyde => 3,
        }
    }

    /// Blinky starts every level and life outside the house.
    pub const fn starts_outside(self) -> bool {
        matches!(self, Personality::Blinky)
    }
}

/// What a ghost is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GhostMode {
    WaitingAtSpawn,
    ReturningToSpawn,
    Scatter,
    Chasing,
    Frightened,
}

impl GhostMode {
    /// Ghosts in the house, or heading back to it, cannot collide with the player.
    pub const fn is_alive(self) -> bool {
        !matches!(self, GhostMode::WaitingAtSpawn | GhostMode::ReturningToSpawn)
    }
}

/// What happens when a ghost's own dot counter reaches its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// Release the ghost from the house.
    Release,
    /// Nothing; the ghost is refilling its counter after being eaten.
    Refill,
}

/// A single ghost.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub entity: Entity,
    pub mode: GhostMode,
    pub dot_counter: DotCounter<CounterAction>,
    /// Destination cell chosen by the ghost's behavior, if any.
    pub target: Option<IVec2>,
    personality: Personality,
    spawn: LocationInfo,
}

impl Ghost {
    pub fn new(personality: Personality, spawn: LocationInfo) -> Self {
        Self {
            entity: Entity::new(spawn, Direction::Left),
            mode: Self::home_mode(personality),
            dot_counter: DotCounter::new(0, Some(CounterAction::Release)),
            target: None,
            personality,
            spawn,
        }
    }

    fn home_mode(personality: Personality) -> GhostMode {
        if personality.starts_outside() {
            GhostMode::Scatter
        } else {
            GhostMode::WaitingAtSpawn
        }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn spawn(&self) -> LocationInfo {
        self.spawn
    }

    pub fn is_alive(&self) -> bool {
        self.mode.is_alive()
    }

    pub fn is_waiting(&self) -> bool {
        self.mode == GhostMode::WaitingAtSpawn
    }

    /// Puts the ghost back on its spawn cell in its level-start mode.
    pub fn rehome(&mut self) {
        self.entity = Entity::new(self.spawn, Direction::Left);
        self.mode = Self::home_mode(self.personality);
        self.target = None;
    }

    /// Puts the ghost back on its spawn cell to wait for release, whoever it is.
    pub fn send_home(&mut self) {
        self.entity = Entity::new(self.spawn, Direction::Left);
        self.mode = GhostMode::WaitingAtSpawn;
        self.target = None;
    }
}

/// The four ghosts, addressable by personality.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghosts([Ghost; 4]);

impl Ghosts {
    /// Creates all four ghosts from their spawn locations, in index order.
    pub fn new(spawns: [LocationInfo; 4]) -> Self {
        let [blinky, pinky, inky, clyde] = spawns;
        Self([
            Ghost::new(Personality::Blinky, blinky),
            Ghost::new(Personality::Pinky, pinky),
            Ghost::new(Personality::Inky, inky),
            Ghost::new(Personality::Clyde, clyde),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ghost> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ghost> {
        self.0.iter_mut()
    }

    /// The most preferred ghost still waiting in the house.
    pub fn first_waiting(&self) -> Option<Personality> {
        Personality::RELEASE_ORDER
            .into_iter()
            .find(|&personality| self[personality].is_waiting())
    }

    pub fn any_frightened(&self) -> bool {
        self.0.iter().any(|ghost| ghost.mode == GhostMode::Frightened)
    }

    /// Forces every ghost outside the house into `mode`.
    pub fn set_living_mode(&mut self, mode: GhostMode) {
        for ghost in self.0.iter_mut().filter(|ghost| ghost.is_alive()) {
            ghost.mode = mode;
        }
    }

    pub fn rehome_all(&mut self) {
        self.0.iter_mut().for_each(Ghost::rehome);
    }
}

impl Index<Personality> for Ghosts {
    type Output = Ghost;

    fn index(&self, personality: Personality) -> &Ghost {
        &self.0[personality.index()]
    }
}

impl IndexMut<Personality> for Ghosts {
    fn index_mut(&mut self, personality: Personality) -> &mut Ghost {
        &mut self.0[personality.index()]
    }
}
