//! Map construction and building functionality.

use glam::IVec2;
use tracing::debug;

use crate::constants::{MapTile, RAW_BOARD};
use crate::error::{GameResult, MapError};
use crate::map::graph::{NavigationGraph, TunnelExits};
use crate::map::line::Line;
use crate::map::parser::{parse_dots, parse_segments, MapTileParser, ParsedMap};
use crate::systems::item::{DotKind, DotSpec};

/// A validated maze: the navigation graph and the dot layout placed on it.
#[derive(Debug, Clone)]
pub struct Map {
    pub graph: NavigationGraph,
    pub dots: Vec<DotSpec>,
    /// The player's starting cell, when the source defines one.
    pub player_start: Option<IVec2>,
}

impl Map {
    /// Builds a map from maze lines and a dot layout.
    ///
    /// # Errors
    ///
    /// Returns an error if a line is malformed or duplicated, a tunnel exit is missing,
    /// or a dot is duplicated or lies off the maze.
    pub fn new(lines: Vec<Line>, dots: Vec<DotSpec>, exits: TunnelExits) -> GameResult<Map> {
        let graph = NavigationGraph::new(lines, exits)?;
        if let Some(dot) = dots.iter().find(|dot| !graph.contains(dot.position)) {
            return Err(MapError::DotOffGraph(dot.position).into());
        }

        Ok(Map {
            graph,
            dots,
            player_start: None,
        })
    }

    /// Builds a map from the text formats accepted by [`parse_segments`] and [`parse_dots`].
    pub fn from_text(segments: &str, dots: &str, exits: TunnelExits) -> GameResult<Map> {
        Self::new(parse_segments(segments)?, parse_dots(dots)?, exits)
    }

    /// Builds a map from a character board.
    ///
    /// Every maximal horizontal or vertical run of at least two walkable tiles becomes a
    /// line, and every pellet or power pellet tile becomes a dot.
    pub fn from_board(raw_board: &[&str], exits: TunnelExits) -> GameResult<Map> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        let lines = board_lines(&parsed);
        let dots = board_dots(&parsed);
        debug!(
            width = parsed.width(),
            height = parsed.height(),
            lines = lines.len(),
            dots = dots.len(),
            "Parsed board"
        );

        let mut map = Self::new(lines, dots, exits)?;
        map.player_start = parsed.player_start;
        Ok(map)
    }

    /// The classic 28x31 arcade board with its default tunnel.
    pub fn classic() -> GameResult<Map> {
        Self::from_board(&RAW_BOARD, TunnelExits::default())
    }
}

/// Collects the maximal straight runs of walkable tiles, rows first, then columns.
fn board_lines(parsed: &ParsedMap) -> Vec<Line> {
    let (width, height) = (parsed.width() as i32, parsed.height() as i32);
    let walkable = |x: i32, y: i32| parsed.tile(IVec2::new(x, y)).is_some_and(MapTile::is_walkable);

    let mut lines = Vec::new();
    for y in 0..height {
        collect_runs(width, |x| walkable(x, y), |start, end| {
            lines.push(Line::from_coords(start, y, end, y));
        });
    }
    for x in 0..width {
        collect_runs(height, |y| walkable(x, y), |start, end| {
            lines.push(Line::from_coords(x, start, x, end));
        });
    }
    lines
}

/// Calls `emit` with the bounds of every run of two or more consecutive open cells.
fn collect_runs(len: i32, is_open: impl Fn(i32) -> bool, mut emit: impl FnMut(i32, i32)) {
    let mut start = None;
    for i in 0..=len {
        match (start, i < len && is_open(i)) {
            (None, true) => start = Some(i),
            (Some(first), false) => {
                if i - 1 > first {
                    emit(first, i - 1);
                }
                start = None;
            }
            _ => {}
        }
    }
}

fn board_dots(parsed: &ParsedMap) -> Vec<DotSpec> {
    let mut dots = Vec::new();
    for (y, row) in parsed.tiles.iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            let kind = match tile {
                MapTile::Pellet => DotKind::Pellet,
                MapTile::PowerPellet => DotKind::Energizer,
                _ => continue,
            };
            dots.push(DotSpec::new(IVec2::new(x as i32, y as i32), kind));
        }
    }
    dots
}
