use pacman_core::systems::counter::DotCounter;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_fires_once_at_limit() {
    let mut counter = DotCounter::new(3, Some("release"));

    assert_eq!(counter.dot_eaten(), None);
    assert_eq!(counter.dot_eaten(), None);
    assert_eq!(counter.dot_eaten(), Some("release"));
    assert_that(&counter.limit_reached()).is_true();

    for _ in 0..10 {
        assert_eq!(counter.dot_eaten(), None);
    }
    assert_eq!(counter.count(), 13);
}

#[test]
fn test_zero_limit_fires_on_first_dot() {
    let mut counter = DotCounter::new(0, Some(1));
    assert_that(&counter.is_satisfied()).is_true();
    assert_eq!(counter.dot_eaten(), Some(1));
}

#[test]
fn test_set_limit_rearms_and_keeps_count() {
    let mut counter = DotCounter::new(2, Some('a'));
    counter.dot_eaten();
    assert_eq!(counter.dot_eaten(), Some('a'));

    counter.set_limit(4);
    counter.set_action('b');
    assert_eq!(counter.count(), 2);
    assert_eq!(counter.dot_eaten(), None);
    assert_eq!(counter.dot_eaten(), Some('b'));
}

#[test]
fn test_lower_limit_fires_on_next_dot() {
    let mut counter = DotCounter::new(10, Some(()));
    for _ in 0..5 {
        counter.dot_eaten();
    }
    counter.set_limit(3);
    assert_eq!(counter.dot_eaten(), Some(()));
}

#[test]
fn test_reset_zeroes_count_and_keeps_limit() {
    let mut counter = DotCounter::new(2, Some(7));
    counter.dot_eaten();
    counter.dot_eaten();

    counter.reset();
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.limit(), 2);
    assert_that(&counter.limit_reached()).is_false();

    counter.dot_eaten();
    assert_eq!(counter.dot_eaten(), Some(7));
}

#[test]
fn test_no_action_fires_nothing() {
    let mut counter: DotCounter<u8> = DotCounter::default();
    assert_eq!(counter.dot_eaten(), None);
    assert_that(&counter.limit_reached()).is_true();

    counter.set_action(5);
    counter.clear_action();
    counter.reset();
    assert_eq!(counter.dot_eaten(), None);
    assert_eq!(counter.action(), None);
}

#[test]
fn test_force_count_keeps_arm_state() {
    let mut counter = DotCounter::new(30, Some(true));
    counter.force_count(29);
    assert_that(&counter.is_satisfied()).is_false();
    assert_eq!(counter.dot_eaten(), Some(true));
}
