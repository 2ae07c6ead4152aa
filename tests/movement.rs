use glam::IVec2;
use pacman_core::constants::MOVE_STEP;
use pacman_core::error::NavigationError;
use pacman_core::map::builder::Map;
use pacman_core::map::direction::Direction;
use pacman_core::map::graph::{NavigationGraph, TunnelExits};
use pacman_core::map::line::Line;
use pacman_core::systems::movement::try_move;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

// Line ids in the test maze, in `common::test_lines` order.
const LEFT_EXIT: usize = 0;
const RIGHT_EXIT: usize = 1;
const MIDDLE: usize = 2;
const LEFT_SIDE: usize = 3;
const TOP: usize = 5;

#[test]
fn test_creep_along_line() {
    let graph = common::test_graph();
    let mut entity = common::entity_on(MIDDLE, 0.5);

    let moved = try_move(Direction::Right, &mut entity, &graph, MOVE_STEP).unwrap();
    assert_that(&moved).is_true();
    assert_eq!(entity.location.line(), MIDDLE);
    assert!((entity.location.position() - 0.525).abs() < 1e-6);
    assert_eq!(entity.orientation, Direction::Right);

    try_move(Direction::Left, &mut entity, &graph, MOVE_STEP).unwrap();
    assert!((entity.location.position() - 0.5).abs() < 1e-6);
    assert_eq!(entity.orientation, Direction::Left);
}

#[test]
fn test_blocked_move_leaves_entity_untouched() {
    let graph = common::test_graph();
    let mut entity = common::entity_on(MIDDLE, 0.5);
    let before = entity;

    assert_that(&try_move(Direction::Up, &mut entity, &graph, MOVE_STEP).unwrap()).is_false();
    assert_that(&try_move(Direction::Down, &mut entity, &graph, MOVE_STEP).unwrap()).is_false();
    assert_eq!(entity, before);
}

#[test]
fn test_dead_end_corner() {
    let graph = common::test_graph();
    let mut entity = common::entity_on(LEFT_SIDE, 0.0);
    let before = entity;

    assert_that(&try_move(Direction::Up, &mut entity, &graph, MOVE_STEP).unwrap()).is_false();
    assert_that(&try_move(Direction::Left, &mut entity, &graph, MOVE_STEP).unwrap()).is_false();
    assert_eq!(entity, before);
}

#[test]
fn test_switch_to_only_other_line() {
    let graph = common::test_graph();
    let mut entity = common::entity_on(TOP, 0.0);

    assert_that(&try_move(Direction::Down, &mut entity, &graph, MOVE_STEP).unwrap()).is_true();
    assert_eq!(entity.location.line(), LEFT_SIDE);
    assert_eq!(entity.location.position(), 0.0);
    assert_eq!(entity.orientation, Direction::Down);
    assert_eq!(entity.grid_location(&graph).unwrap(), IVec2::new(3, 0));
}

#[test]
fn test_switch_picks_line_containing_neighbour() {
    let graph = common::test_graph();

    let mut going_right = common::entity_on(LEFT_EXIT, 1.0);
    try_move(Direction::Right, &mut going_right, &graph, MOVE_STEP).unwrap();
    assert_eq!(going_right.location.line(), MIDDLE);
    assert_eq!(going_right.location.position(), 0.0);

    let mut going_down = common::entity_on(LEFT_EXIT, 1.0);
    try_move(Direction::Down, &mut going_down, &graph, MOVE_STEP).unwrap();
    assert_eq!(going_down.location.line(), LEFT_SIDE);
    assert_eq!(going_down.location.position(), 0.5);
    assert_eq!(going_down.grid_location(&graph).unwrap(), IVec2::new(3, 2));
}

#[test]
fn test_switch_at_interior_crossing_keeps_cell() {
    let horizontal = Line::from_coords(0, 2, 4, 2);
    let vertical = Line::from_coords(2, 0, 2, 4);
    let graph = NavigationGraph::new(vec![horizontal, vertical], TunnelExits::new(horizontal, vertical)).unwrap();
    let mut entity = common::entity_at(&graph, IVec2::new(2, 2));

    assert_that(&try_move(Direction::Down, &mut entity, &graph, MOVE_STEP).unwrap()).is_true();
    assert_eq!(entity.location.line(), 1);
    assert_eq!(entity.location.position(), 0.5);
    assert_eq!(entity.grid_location(&graph).unwrap(), IVec2::new(2, 2));
}

#[test]
fn test_ambiguous_junction_is_an_error() {
    let first = Line::from_coords(0, 0, 4, 0);
    let overlapping = Line::from_coords(2, 0, 6, 0);
    let vertical = Line::from_coords(2, 0, 2, 3);
    let graph = NavigationGraph::new(vec![first, overlapping, vertical], TunnelExits::new(first, overlapping)).unwrap();
    let mut entity = common::entity_on(2, 0.0);

    assert_eq!(
        try_move(Direction::Right, &mut entity, &graph, MOVE_STEP),
        Err(NavigationError::AmbiguousJunction {
            cell: IVec2::new(2, 0),
            direction: Direction::Right,
            candidates: 2,
        })
    );
}

#[test]
fn test_unknown_line_is_an_error() {
    let graph = common::test_graph();
    let mut entity = common::entity_on(42, 0.0);
    assert_eq!(
        try_move(Direction::Left, &mut entity, &graph, MOVE_STEP),
        Err(NavigationError::LineNotFound(42))
    );
}

#[test]
fn test_tunnel_round_trip() {
    let graph = common::test_graph();
    let mut entity = common::entity_on(LEFT_EXIT, 0.0);

    assert_that(&try_move(Direction::Left, &mut entity, &graph, MOVE_STEP).unwrap()).is_true();
    assert_eq!(entity.location.line(), RIGHT_EXIT);
    assert_eq!(entity.location.position(), 1.0);
    assert_eq!(entity.grid_location(&graph).unwrap(), IVec2::new(10, 2));

    assert_that(&try_move(Direction::Right, &mut entity, &graph, MOVE_STEP).unwrap()).is_true();
    assert_eq!(entity.location.line(), LEFT_EXIT);
    assert_eq!(entity.location.position(), 0.0);
    assert_eq!(entity.grid_location(&graph).unwrap(), IVec2::new(0, 2));
}

#[test]
fn test_tunnel_only_wraps_outwards() {
    let graph = common::test_graph();

    let mut inner_end = common::entity_on(RIGHT_EXIT, 0.0);
    try_move(Direction::Left, &mut inner_end, &graph, MOVE_STEP).unwrap();
    assert_eq!(inner_end.location.line(), MIDDLE);

    let mut wrong_way = common::entity_on(LEFT_EXIT, 0.0);
    let before = wrong_way;
    assert_that(&try_move(Direction::Up, &mut wrong_way, &graph, MOVE_STEP).unwrap()).is_false();
    assert_eq!(wrong_way, before);
}

#[test]
fn test_creep_reaches_exact_endpoint_before_wrapping() {
    let graph = common::test_graph();
    let mut entity = common::entity_on(LEFT_EXIT, 0.05);

    try_move(Direction::Left, &mut entity, &graph, MOVE_STEP).unwrap();
    assert_eq!(entity.location.line(), LEFT_EXIT);
    try_move(Direction::Left, &mut entity, &graph, MOVE_STEP).unwrap();
    assert_eq!(entity.location.line(), LEFT_EXIT);
    assert_eq!(entity.location.position(), 0.0);

    try_move(Direction::Left, &mut entity, &graph, MOVE_STEP).unwrap();
    assert_eq!(entity.location.line(), RIGHT_EXIT);
}

#[test]
fn test_classic_board_tunnel() {
    let map = Map::classic().unwrap();
    let graph = &map.graph;
    let mut entity = common::entity_at(graph, IVec2::new(0, 14));
    assert_eq!(entity.location.line(), graph.left_exit());

    try_move(Direction::Left, &mut entity, graph, MOVE_STEP).unwrap();
    assert_eq!(entity.grid_location(graph).unwrap(), IVec2::new(27, 14));

    try_move(Direction::Right, &mut entity, graph, MOVE_STEP).unwrap();
    assert_eq!(entity.grid_location(graph).unwrap(), IVec2::new(0, 14));
}
