//! Read-only snapshots of the simulation for the presentation layer.

use std::time::Duration;

use glam::{IVec2, Vec2};

use crate::entity::ghost::{Ghost, GhostMode, Personality};
use crate::entity::Entity;
use crate::error::NavigationError;
use crate::map::direction::Direction;
use crate::map::graph::NavigationGraph;

/// Where an actor is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSnapshot {
    pub cell: IVec2,
    /// Continuous grid coordinate, for drawing between cells.
    pub position: Vec2,
    pub orientation: Direction,
    pub is_moving: bool,
}

impl ActorSnapshot {
    pub fn capture(entity: &Entity, graph: &NavigationGraph) -> Result<Self, NavigationError> {
        Ok(Self {
            cell: entity.grid_location(graph)?,
            position: entity.location.world_position(graph)?,
            orientation: entity.orientation,
            is_moving: entity.is_moving,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostSnapshot {
    pub personality: Personality,
    pub mode: GhostMode,
    pub target: Option<IVec2>,
    pub actor: ActorSnapshot,
}

impl GhostSnapshot {
    pub fn capture(ghost: &Ghost, graph: &NavigationGraph) -> Result<Self, NavigationError> {
        Ok(Self {
            personality: ghost.personality(),
            mode: ghost.mode,
            target: ghost.target,
            actor: ActorSnapshot::capture(&ghost.entity, graph)?,
        })
    }
}

/// An owned copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub player: ActorSnapshot,
    pub ghosts: Vec<GhostSnapshot>,
    /// Cells of the dots not yet eaten, with their energizer flag.
    pub dots: Vec<(IVec2, bool)>,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub can_eat_ghosts: bool,
    pub phase: GhostMode,
    pub elapsed: Duration,
    pub game_over: bool,
    pub debug_mode: bool,
}
