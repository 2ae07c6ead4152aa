use std::time::Duration;

use pacman_core::constants::release::{dot_limits, forced_release_timeout, GLOBAL_LIMITS};
use pacman_core::constants::*;

#[test]
fn test_raw_board_structure() {
    // Test board dimensions match expected size
    assert_eq!(RAW_BOARD.len(), BOARD_CELL_SIZE.y as usize);
    for row in RAW_BOARD.iter() {
        assert_eq!(row.len(), BOARD_CELL_SIZE.x as usize);
    }

    // Test boundaries are properly walled
    assert!(RAW_BOARD[0].chars().all(|c| c == '#'));
    assert!(RAW_BOARD[RAW_BOARD.len() - 1].chars().all(|c| c == '#'));
}

#[test]
fn test_raw_board_contains_required_elements() {
    assert!(
        RAW_BOARD.iter().any(|row| row.contains('0')),
        "Board should contain the player start position"
    );
    assert!(
        RAW_BOARD.iter().any(|row| row.contains("==")),
        "Board should contain ghost house door"
    );
    assert_eq!(
        RAW_BOARD.iter().flat_map(|row| row.chars()).filter(|&c| c == 'o').count(),
        4,
        "Board should contain four power pellets"
    );
}

#[test]
fn test_tunnel_exits_lie_on_the_tunnel_row() {
    let row = RAW_BOARD[LEFT_TUNNEL_EXIT.0.y as usize];
    assert!(row.starts_with('T') && row.ends_with('T'));
    assert_eq!(LEFT_TUNNEL_EXIT.0.x, 0);
    assert_eq!(RIGHT_TUNNEL_EXIT.1.x, BOARD_CELL_SIZE.x as i32 - 1);
}

#[test]
fn test_release_tables() {
    assert_eq!(dot_limits(1), [0, 30, 60]);
    assert_eq!(dot_limits(2), [0, 0, 50]);
    assert_eq!(dot_limits(3), [0, 0, 0]);
    assert_eq!(dot_limits(21), [0, 0, 0]);
    assert_eq!(GLOBAL_LIMITS, [7, 17, 32]);

    assert_eq!(forced_release_timeout(1), Duration::from_secs(4));
    assert_eq!(forced_release_timeout(4), Duration::from_secs(4));
    assert_eq!(forced_release_timeout(5), Duration::from_secs(3));
}
