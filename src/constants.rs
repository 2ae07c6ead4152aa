//! This module contains all the constants and fixed rules used by the simulation.

use std::time::Duration;

use glam::{IVec2, UVec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the classic game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);

/// Distance travelled along a line per resolved move, in grid units.
pub const MOVE_STEP: f32 = 0.1;

/// Number of lives at the start of a game.
pub const STARTING_LIVES: u8 = 3;

/// Scores, bonus life and power mode.
pub mod scoring {
    use std::time::Duration;

    pub const PELLET_SCORE: u32 = 10;
    pub const ENERGIZER_SCORE: u32 = 50;
    /// Reaching this score awards one extra life, once per game.
    pub const BONUS_LIFE_SCORE: u32 = 10_000;
    pub const POWER_DURATION: Duration = Duration::from_secs(4);
    /// Energizers stop granting power on this level and above.
    pub const POWER_LEVEL_CUTOFF: u32 = 19;
}

/// Ghost house release rules.
pub mod release {
    use std::time::Duration;

    /// Global counter stages used after a life is lost: Pinky, Inky, Clyde.
    pub const GLOBAL_LIMITS: [u32; 3] = [7, 17, 32];

    /// Per-ghost dot limits for Pinky, Inky and Clyde on the given level.
    pub const fn dot_limits(level: u32) -> [u32; 3] {
        match level {
            0 | 1 => [0, 30, 60],
            2 => [0, 0, 50],
            _ => [0, 0, 0],
        }
    }

    /// Time without eating a dot after which a waiting ghost is forced out.
    pub const fn forced_release_timeout(level: u32) -> Duration {
        if level < 5 {
            Duration::from_secs(4)
        } else {
            Duration::from_secs(3)
        }
    }
}

/// Default ghost spawn cells on the classic board.
pub mod spawn {
    use glam::IVec2;

    pub const BLINKY: IVec2 = IVec2::new(13, 11);
    pub const PINKY: IVec2 = IVec2::new(12, 11);
    pub const INKY: IVec2 = IVec2::new(14, 11);
    pub const CLYDE: IVec2 = IVec2::new(15, 11);
}

/// Endpoints of the tunnel lines on the classic board.
pub const LEFT_TUNNEL_EXIT: (IVec2, IVec2) = (IVec2::new(0, 14), IVec2::new(9, 14));
pub const RIGHT_TUNNEL_EXIT: (IVec2, IVec2) = (IVec2::new(18, 14), IVec2::new(27, 14));

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
    /// The player's starting cell.
    StartingPosition,
    /// A tunnel tile.
    Tunnel,
    /// The ghost house door. Walkable so the house connects to the maze.
    HouseDoor,
}

impl MapTile {
    /// Returns true if an entity can stand on this tile.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, MapTile::Wall)
    }
}

/// The raw layout of the game board, as a 2D array of characters.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##    ==    ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "T     .   ########   .     T",
    "######.## ######## ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......0 .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];
