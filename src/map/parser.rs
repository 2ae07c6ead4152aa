//! Map parsing functionality for converting raw layouts into structured data.
//!
//! Two sources are supported: a character board (see [`MapTileParser`]) and the plain
//! text line formats read by [`parse_segments`] and [`parse_dots`].

use glam::IVec2;

use crate::constants::MapTile;
use crate::error::ParseError;
use crate::map::line::Line;
use crate::systems::item::{DotKind, DotSpec};

/// Represents the parsed data from a raw board layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMap {
    /// The parsed tiles, indexed as `tiles[y][x]`.
    pub tiles: Vec<Vec<MapTile>>,
    /// The positions of the tunnel end tiles.
    pub tunnel_ends: Vec<IVec2>,
    /// The player's starting position.
    pub player_start: Option<IVec2>,
}

impl ParsedMap {
    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// The tile at `cell`, or `None` outside the board.
    pub fn tile(&self, cell: IVec2) -> Option<MapTile> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        self.tiles.get(y)?.get(x).copied()
    }
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            'T' => Ok(MapTile::Tunnel),
            '=' => Ok(MapTile::HouseDoor),
            '0' => Ok(MapTile::StartingPosition),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board contains unknown characters or if its rows differ
    /// in width.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let expected = raw_board.first().map_or(0, |row| row.chars().count());
        let mut tiles = Vec::with_capacity(raw_board.len());
        let mut tunnel_ends = Vec::new();
        let mut player_start = None;

        for (y, row) in raw_board.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(ParseError::RaggedBoard { row: y, expected, found });
            }

            let mut parsed = Vec::with_capacity(found);
            for (x, character) in row.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let cell = IVec2::new(x as i32, y as i32);
                match tile {
                    MapTile::Tunnel => tunnel_ends.push(cell),
                    MapTile::StartingPosition => player_start = Some(cell),
                    _ => {}
                }
                parsed.push(tile);
            }
            tiles.push(parsed);
        }

        Ok(ParsedMap {
            tiles,
            tunnel_ends,
            player_start,
        })
    }
}

/// Splits a text source into numbered, comment-free, non-empty lines.
fn data_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.split('#').next().unwrap_or_default().trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_int(line: usize, value: &str) -> Result<i32, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidValue {
        line,
        value: value.trim().to_string(),
    })
}

/// Parses maze lines in the `x0,y0,x1,y1` format, one per line.
///
/// Blank lines and `#` comments are ignored. Geometry is not validated here.
pub fn parse_segments(source: &str) -> Result<Vec<Line>, ParseError> {
    data_lines(source)
        .map(|(number, line)| {
            let fields: Vec<&str> = line.split(',').collect();
            let [x0, y0, x1, y1] = fields.as_slice() else {
                return Err(ParseError::FieldCount {
                    line: number,
                    expected: "4",
                    found: fields.len(),
                });
            };
            Ok(Line::from_coords(
                parse_int(number, x0)?,
                parse_int(number, y0)?,
                parse_int(number, x1)?,
                parse_int(number, y1)?,
            ))
        })
        .collect()
}

/// Parses a dot layout in the `x,y[,energizer]` format, one dot per line.
///
/// The optional third field accepts `true`/`false`, `1`/`0` or `e`/`energizer`.
pub fn parse_dots(source: &str) -> Result<Vec<DotSpec>, ParseError> {
    data_lines(source)
        .map(|(number, line)| {
            let fields: Vec<&str> = line.split(',').collect();
            let (x, y, flag) = match fields.as_slice() {
                [x, y] => (x, y, None),
                [x, y, flag] => (x, y, Some(flag.trim())),
                _ => {
                    return Err(ParseError::FieldCount {
                        line: number,
                        expected: "2 or 3",
                        found: fields.len(),
                    })
                }
            };

            let kind = match flag {
                None | Some("false" | "0") => DotKind::Pellet,
                Some("true" | "1" | "e" | "energizer") => DotKind::Energizer,
                Some(other) => {
                    return Err(ParseError::InvalidValue {
                        line: number,
                        value: other.to_string(),
                    })
                }
            };

            Ok(DotSpec::new(IVec2::new(parse_int(number, x)?, parse_int(number, y)?), kind))
        })
        .collect()
}
