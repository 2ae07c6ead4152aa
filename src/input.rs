//! Logical player intents, sampled once per tick.
//!
//! Mapping physical keys onto intents is the host's job; the simulation only sees the
//! set of intents held during a tick.

use bitflags::bitflags;

use crate::map::direction::Direction;

bitflags! {
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Intents: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const RESTART = 1 << 4;
        const DEBUG = 1 << 5;
    }
}

impl Intents {
    /// Held movement directions, in the priority order they are tried.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::DIRECTIONS
            .into_iter()
            .filter(move |&direction| self.contains(Intents::from(direction)))
    }
}

impl From<Direction> for Intents {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Intents::UP,
            Direction::Down => Intents::DOWN,
            Direction::Left => Intents::LEFT,
            Direction::Right => Intents::RIGHT,
        }
    }
}
