//! Centralized error types for the simulation core.
//!
//! Errors fall into two groups. Configuration errors ([`ParseError`], [`MapError`]) are
//! produced while building the maze and abort construction. Invariant violations
//! ([`NavigationError`]) mean the maze data or the simulation state is corrupt and must
//! halt the simulation; they are never retried. Ordinary negative outcomes, such as a
//! blocked move or an already eaten dot, are plain `bool`/`Option` values and not errors.

use glam::IVec2;

use crate::map::direction::Direction;
use crate::map::graph::TunnelSide;
use crate::map::line::{Line, LineId};

/// Main error type for the simulation core.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Elapsed time must be finite and non-negative, got {0}")]
    InvalidElapsed(f32),
}

/// Error type for parsing boards and textual layouts.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),

    #[error("Board row {row} has width {found}, expected {expected}")]
    RaggedBoard { row: usize, expected: usize, found: usize },

    #[error("Line {line}: expected {expected} comma separated values, found {found}")]
    FieldCount { line: usize, expected: &'static str, found: usize },

    #[error("Line {line}: invalid value {value:?}")]
    InvalidValue { line: usize, value: String },
}

/// Errors in the maze or dot data, detected while building the navigation graph.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MapError {
    #[error("The maze contains no lines")]
    Empty,

    #[error("Line {0} is not axis-aligned")]
    NotAxisAligned(Line),

    #[error("Line {0} has zero length")]
    ZeroLength(Line),

    #[error("Line {0} is defined more than once")]
    DuplicateLine(Line),

    #[error("No line matches the {0} tunnel exit")]
    MissingTunnelExit(TunnelSide),

    #[error("Spawn cell {cell} for {entity} is not on any line")]
    SpawnOffGraph { entity: &'static str, cell: IVec2 },

    #[error("Dot at {0} is defined more than once")]
    DuplicateDot(IVec2),

    #[error("Dot at {0} is not on any line")]
    DotOffGraph(IVec2),
}

/// Invariant violations raised while resolving positions and movement.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NavigationError {
    #[error("Position {0} is outside of [0, 1]")]
    PositionOutOfRange(f32),

    #[error("Point {point} does not lie on line {line}")]
    NotOnLine { point: IVec2, line: Line },

    #[error("Cell {0} is not on any line")]
    NoLinesAtCell(IVec2),

    #[error("Line id {0} does not exist")]
    LineNotFound(LineId),

    #[error("Cannot pick a unique line leaving {cell} towards {direction:?} ({candidates} candidates)")]
    AmbiguousJunction {
        cell: IVec2,
        direction: Direction,
        candidates: usize,
    },
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
