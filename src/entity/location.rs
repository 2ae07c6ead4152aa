use glam::{IVec2, Vec2};

use crate::error::NavigationError;
use crate::map::graph::NavigationGraph;
use crate::map::line::LineId;

/// Where an entity is: the line it occupies and how far along it.
///
/// The position is clamped to `[0, 1]` on every write, so it can never leave its line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationInfo {
    line: LineId,
    position: f32,
}

impl LocationInfo {
    pub fn new(line: LineId, position: f32) -> Self {
        Self {
            line,
            position: clamp_position(position),
        }
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn set_position(&mut self, position: f32) {
        self.position = clamp_position(position);
    }

    /// Moves along the current line by `delta`, stopping at either end.
    pub fn advance(&mut self, delta: f32) {
        self.set_position(self.position + delta);
    }

    /// Switches to another line.
    pub fn move_to(&mut self, line: LineId, position: f32) {
        self.line = line;
        self.set_position(position);
    }

    pub fn is_at_endpoint(&self) -> bool {
        self.position == 0.0 || self.position == 1.0
    }

    /// The grid cell this location rounds to.
    pub fn grid_location(&self, graph: &NavigationGraph) -> Result<IVec2, NavigationError> {
        graph.line(self.line)?.point_at(self.position)
    }

    /// The continuous grid coordinate of this location.
    pub fn world_position(&self, graph: &NavigationGraph) -> Result<Vec2, NavigationError> {
        Ok(graph.line(self.line)?.world_position(self.position))
    }
}

fn clamp_position(position: f32) -> f32 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_clamped() {
        let mut location = LocationInfo::new(0, 1.5);
        assert_eq!(location.position(), 1.0);
        assert!(location.is_at_endpoint());

        location.advance(-2.0);
        assert_eq!(location.position(), 0.0);

        location.set_position(f32::NAN);
        assert_eq!(location.position(), 0.0);
    }

    #[test]
    fn test_interior_is_not_endpoint() {
        let mut location = LocationInfo::new(3, 0.25);
        assert!(!location.is_at_endpoint());

        location.move_to(7, 1.0);
        assert_eq!(location.line(), 7);
        assert!(location.is_at_endpoint());
    }
}
