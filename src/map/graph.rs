use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;
use smallvec::SmallVec;
use strum_macros::Display;
use tracing::debug;

use crate::constants::{LEFT_TUNNEL_EXIT, RIGHT_TUNNEL_EXIT};
use crate::entity::location::LocationInfo;
use crate::error::{MapError, NavigationError};
use crate::map::direction::Direction;
use crate::map::line::{Line, LineId};

/// One side of the horizontal wraparound tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TunnelSide {
    Left,
    Right,
}

/// The sentinel lines that identify the wraparound tunnel.
///
/// A maze line is a tunnel exit when both of its endpoints match the configured line,
/// regardless of the order they were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunnelExits {
    pub left: Line,
    pub right: Line,
}

impl TunnelExits {
    pub const fn new(left: Line, right: Line) -> Self {
        Self { left, right }
    }
}

impl Default for TunnelExits {
    fn default() -> Self {
        Self {
            left: Line::new(LEFT_TUNNEL_EXIT.0, LEFT_TUNNEL_EXIT.1),
            right: Line::new(RIGHT_TUNNEL_EXIT.0, RIGHT_TUNNEL_EXIT.1),
        }
    }
}

/// The maze, as an immutable set of axis-aligned lines.
///
/// There is no adjacency structure: movement only ever needs to know which lines touch
/// a given cell, which is answered with a containment scan.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationGraph {
    lines: Vec<Line>,
    left_exit: LineId,
    right_exit: LineId,
    min: IVec2,
    max: IVec2,
}

impl NavigationGraph {
    /// Builds the graph, validating every line and locating both tunnel exits.
    pub fn new(lines: impl IntoIterator<Item = Line>, exits: TunnelExits) -> Result<Self, MapError> {
        let lines: Vec<Line> = lines.into_iter().collect();
        if lines.is_empty() {
            return Err(MapError::Empty);
        }

        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if line.start == line.end {
                return Err(MapError::ZeroLength(*line));
            }
            if !line.is_axis_aligned() {
                return Err(MapError::NotAxisAligned(*line));
            }
            if !seen.insert(*line) {
                return Err(MapError::DuplicateLine(*line));
            }
        }

        let left_exit = lines
            .iter()
            .position(|line| *line == exits.left)
            .ok_or(MapError::MissingTunnelExit(TunnelSide::Left))?;
        let right_exit = lines
            .iter()
            .position(|line| *line == exits.right)
            .ok_or(MapError::MissingTunnelExit(TunnelSide::Right))?;

        let (min, max) = lines
            .iter()
            .fold((lines[0].min(), lines[0].max()), |(min, max), line| {
                (min.min(line.min()), max.max(line.max()))
            });

        debug!(lines = lines.len(), ?min, ?max, "Navigation graph built");

        Ok(Self {
            lines,
            left_exit,
            right_exit,
            min,
            max,
        })
    }

    /// All lines, indexed by [`LineId`].
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Result<&Line, NavigationError> {
        self.lines.get(id).ok_or(NavigationError::LineNotFound(id))
    }

    /// Returns every line containing `point`.
    pub fn lines_at(&self, point: IVec2) -> SmallVec<[LineId; 4]> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(point))
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns true if at least one line contains `point`.
    pub fn contains(&self, point: IVec2) -> bool {
        self.lines.iter().any(|line| line.contains(point))
    }

    pub fn left_exit(&self) -> LineId {
        self.left_exit
    }

    pub fn right_exit(&self) -> LineId {
        self.right_exit
    }

    /// The tunnel line for the given side.
    pub fn exit(&self, side: TunnelSide) -> LineId {
        match side {
            TunnelSide::Left => self.left_exit,
            TunnelSide::Right => self.right_exit,
        }
    }

    /// Horizontal extent of the bounding box of all lines.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Vertical extent of the bounding box of all lines.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Top-left and bottom-right corners of the bounding box.
    pub fn bounds(&self) -> (IVec2, IVec2) {
        (self.min, self.max)
    }

    /// Resolves `cell` to a location on the first line that contains it.
    pub fn locate(&self, cell: IVec2) -> Result<LocationInfo, NavigationError> {
        let id = self
            .lines
            .iter()
            .position(|line| line.contains(cell))
            .ok_or(NavigationError::NoLinesAtCell(cell))?;
        let position = self.lines[id].position_of(cell)?;
        Ok(LocationInfo::new(id, position))
    }

    /// Picks a uniformly random line and a random position along it.
    ///
    /// The returned orientation faces left on horizontal lines and up on vertical ones.
    pub fn random_location<R: Rng + ?Sized>(&self, rng: &mut R) -> (LocationInfo, Direction) {
        let id = rng.random_range(0..self.lines.len());
        let position: f32 = rng.random();
        let orientation = if self.lines[id].is_horizontal() {
            Direction::Left
        } else {
            Direction::Up
        };
        (LocationInfo::new(id, position), orientation)
    }
}
