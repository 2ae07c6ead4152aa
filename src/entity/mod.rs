//! Actors that move through the maze: the player and the four ghosts.

pub mod ghost;
pub mod location;
pub mod player;

use glam::IVec2;

use crate::entity::location::LocationInfo;
use crate::error::NavigationError;
use crate::map::direction::Direction;
use crate::map::graph::NavigationGraph;

/// Movement state shared by the player and the ghosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub location: LocationInfo,
    pub orientation: Direction,
    pub is_moving: bool,
}

impl Entity {
    pub fn new(location: LocationInfo, orientation: Direction) -> Self {
        Self {
            location,
            orientation,
            is_moving: false,
        }
    }

    /// The grid cell the entity currently occupies.
    pub fn grid_location(&self, graph: &NavigationGraph) -> Result<IVec2, NavigationError> {
        self.location.grid_location(graph)
    }
}
