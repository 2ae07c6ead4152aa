use pacman_core::map::direction::Direction;
use pacman_core::Intents;
use speculoos::prelude::*;

#[test]
fn test_directions_skip_non_movement_intents() {
    let intents = Intents::RESTART | Intents::DEBUG;
    assert_that(&intents.directions().next()).is_none();
}

#[test]
fn test_all_directions_in_priority_order() {
    let directions: Vec<_> = Intents::all().directions().collect();
    assert_eq!(directions, Direction::DIRECTIONS.to_vec());
}

#[test]
fn test_intent_from_direction() {
    for direction in Direction::DIRECTIONS {
        let intents = Intents::from(direction);
        assert_eq!(intents.directions().collect::<Vec<_>>(), vec![direction]);
    }
}
