#![allow(dead_code)]

use glam::IVec2;
use pacman_core::config::{SimulationConfig, SpawnPoints};
use pacman_core::entity::location::LocationInfo;
use pacman_core::entity::Entity;
use pacman_core::game::events::GameEvents;
use pacman_core::map::builder::Map;
use pacman_core::map::direction::Direction;
use pacman_core::map::graph::{NavigationGraph, TunnelExits};
use pacman_core::map::line::Line;
use pacman_core::systems::item::DotSpec;
use pacman_core::{Game, Intents};

/// A small maze:
///
/// ```text
///       x: 0  1  2  3  4  5  6  7  8  9  10
///   y=0             +--P--B--C--+               (ghost spawns)
///   y=1             |           |
///   y=2    L--------+--.--.--.--+--------R     (tunnel row)
///   y=3             |           |
///   y=4             +--.--o--.--+
/// ```
pub const LEFT_EXIT: Line = Line::from_coords(0, 2, 3, 2);
pub const RIGHT_EXIT: Line = Line::from_coords(7, 2, 10, 2);

pub fn test_lines() -> Vec<Line> {
    vec![
        LEFT_EXIT,
        RIGHT_EXIT,
        Line::from_coords(3, 2, 7, 2),
        Line::from_coords(3, 0, 3, 4),
        Line::from_coords(7, 0, 7, 4),
        Line::from_coords(3, 0, 7, 0),
        Line::from_coords(3, 4, 7, 4),
    ]
}

pub fn test_exits() -> TunnelExits {
    TunnelExits::new(LEFT_EXIT, RIGHT_EXIT)
}

pub fn test_dots() -> Vec<DotSpec> {
    vec![
        DotSpec::pellet(4, 2),
        DotSpec::pellet(5, 2),
        DotSpec::pellet(6, 2),
        DotSpec::pellet(4, 4),
        DotSpec::energizer(5, 4),
        DotSpec::pellet(6, 4),
    ]
}

pub fn test_graph() -> NavigationGraph {
    NavigationGraph::new(test_lines(), test_exits()).unwrap()
}

pub fn test_map() -> Map {
    Map::new(test_lines(), test_dots(), test_exits()).unwrap()
}

pub fn test_spawns() -> SpawnPoints {
    SpawnPoints {
        blinky: IVec2::new(5, 0),
        pinky: IVec2::new(4, 0),
        inky: IVec2::new(5, 0),
        clyde: IVec2::new(6, 0),
    }
}

pub fn test_config() -> SimulationConfig {
    SimulationConfig::default()
        .with_tunnel_exits(test_exits())
        .with_spawns(test_spawns())
        .with_seed(7)
}

/// A game on the test maze with the player on `start`.
pub fn test_game(start: IVec2) -> Game {
    let mut game = Game::new(test_map(), test_config()).unwrap();
    game.place_player(start).unwrap();
    game
}

/// An entity standing on `cell`.
pub fn entity_at(graph: &NavigationGraph, cell: IVec2) -> Entity {
    Entity::new(graph.locate(cell).unwrap(), Direction::Left)
}

/// An entity on a specific line at a specific position.
pub fn entity_on(line: usize, position: f32) -> Entity {
    Entity::new(LocationInfo::new(line, position), Direction::Left)
}

pub const FRAME: f32 = 1.0 / 60.0;

/// Holds `direction` until the player reaches `target`, collecting every event.
///
/// Panics if the target is not reached within `max_ticks`.
pub fn walk_to(game: &mut Game, direction: Direction, target: IVec2, max_ticks: usize) -> GameEvents {
    let mut events = GameEvents::new();
    for _ in 0..max_ticks {
        events.extend(game.tick(Intents::from(direction), FRAME).unwrap());
        if game.player_cell().unwrap() == target {
            return events;
        }
    }
    panic!(
        "player did not reach {target} moving {direction:?}, stopped at {}",
        game.player_cell().unwrap()
    );
}
