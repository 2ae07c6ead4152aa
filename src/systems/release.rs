//! Decides when ghosts waiting in the house are let out.
//!
//! Two counting policies cooperate. At the start of a level every ghost uses its own dot
//! counter, and exactly one of them (the most preferred ghost still waiting) is fed the
//! eaten dots. After a life is lost a single global counter takes over and releases
//! Pinky, Inky and Clyde at fixed totals before handing control back to the per-ghost
//! counters. Independently of both, a ghost is forced out when the player stops eating.

use smallvec::SmallVec;
use tracing::debug;

use crate::constants::release::{dot_limits, GLOBAL_LIMITS};
use crate::entity::ghost::{CounterAction, GhostMode, Ghosts, Personality};
use crate::systems::counter::DotCounter;

/// Ghosts released by a single release model operation, in release order.
pub type Released = SmallVec<[Personality; 4]>;

/// Which counter currently receives eaten-dot events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveCounter {
    #[default]
    None,
    Global,
    Ghost(Personality),
}

/// The ghost house release state: the global counter and the active counter tag.
///
/// The per-ghost counters live on the ghosts themselves and are passed in with
/// [`Ghosts`] on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostReleaseModel {
    global: DotCounter<Personality>,
    global_stage: usize,
    active: ActiveCounter,
}

impl Default for GhostReleaseModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostReleaseModel {
    pub fn new() -> Self {
        Self {
            global: DotCounter::new(GLOBAL_LIMITS[0], Some(Personality::HOUSE[0])),
            global_stage: 0,
            active: ActiveCounter::None,
        }
    }

    pub fn active(&self) -> ActiveCounter {
        self.active
    }

    pub fn global_counter(&self) -> &DotCounter<Personality> {
        &self.global
    }

    /// Arms the per-ghost counters for a new level.
    ///
    /// Ghosts whose limit is already met leave immediately and are returned.
    pub fn begin_level(&mut self, ghosts: &mut Ghosts, level: u32) -> Released {
        let limits = dot_limits(level);
        for (personality, limit) in Personality::HOUSE.into_iter().zip(limits) {
            let counter = &mut ghosts[personality].dot_counter;
            counter.set_limit(limit);
            counter.reset();
            counter.set_action(CounterAction::Release);
        }
        let blinky = &mut ghosts[Personality::Blinky].dot_counter;
        blinky.set_limit(0);
        blinky.reset();
        blinky.set_action(CounterAction::Release);

        self.global.reset();
        self.global_stage = 0;

        let mut released = Released::new();
        self.arm_per_ghost(ghosts, None, &mut released);
        debug!(level, active = ?self.active, released = ?released.as_slice(), "Release counters armed for level");
        released
    }

    /// Switches to the global counter after a life is lost.
    ///
    /// The per-ghost counters are disabled but keep their counts.
    pub fn begin_life(&mut self) {
        self.global_stage = 0;
        self.global.reset();
        self.global.set_limit(GLOBAL_LIMITS[0]);
        self.global.set_action(Personality::HOUSE[0]);
        self.active = ActiveCounter::Global;
        debug!("Global release counter active");
    }

    /// Feeds one eaten dot to the active counter.
    pub fn dot_eaten(&mut self, ghosts: &mut Ghosts) -> Released {
        let mut released = Released::new();
        match self.active {
            ActiveCounter::None => {}
            ActiveCounter::Global => {
                let Some(personality) = self.global.dot_eaten() else {
                    return released;
                };
                if ghosts[personality].is_waiting() {
                    Self::release(ghosts, personality, GhostMode::Scatter);
                    released.push(personality);
                }
                self.global_stage += 1;
                match GLOBAL_LIMITS.get(self.global_stage) {
                    Some(&limit) => {
                        self.global.set_limit(limit);
                        self.global.set_action(Personality::HOUSE[self.global_stage]);
                    }
                    None => {
                        debug!(count = self.global.count(), "Global release counter finished");
                        self.global.clear_action();
                        self.arm_per_ghost(ghosts, None, &mut released);
                    }
                }
            }
            ActiveCounter::Ghost(personality) => {
                let counter = &mut ghosts[personality].dot_counter;
                match counter.dot_eaten() {
                    Some(CounterAction::Release) if ghosts[personality].is_waiting() => {
                        let count = ghosts[personality].dot_counter.count();
                        Self::release(ghosts, personality, GhostMode::Scatter);
                        released.push(personality);
                        self.arm_per_ghost(ghosts, Some(count), &mut released);
                    }
                    Some(action) => {
                        debug!(ghost = personality.as_ref(), ?action, "Dot limit reached without release");
                    }
                    None => {}
                }
            }
        }
        released
    }

    /// Sends an eaten ghost back to the house.
    ///
    /// If no counter is active, the ghost's own counter is restarted and made active
    /// with a no-op completion, so the dots it counts cannot release anyone else.
    pub fn ghost_eaten(&mut self, ghosts: &mut Ghosts, personality: Personality) {
        let ghost = &mut ghosts[personality];
        ghost.send_home();
        if self.active == ActiveCounter::None {
            ghost.dot_counter.reset();
            ghost.dot_counter.set_action(CounterAction::Refill);
            self.active = ActiveCounter::Ghost(personality);
        }
        debug!(ghost = personality.as_ref(), active = ?self.active, "Ghost returned to house");
    }

    /// Forces the most preferred waiting ghost out in Chasing mode.
    ///
    /// The next waiting ghost's counter becomes active; if its limit is already met it
    /// leaves as well. Returns every ghost that left.
    pub fn force_release(&mut self, ghosts: &mut Ghosts) -> Released {
        let mut released = Released::new();
        let Some(personality) = ghosts.first_waiting() else {
            return released;
        };

        debug!(ghost = personality.as_ref(), "Forcing ghost out of the house");
        Self::release(ghosts, personality, GhostMode::Chasing);
        released.push(personality);
        self.arm_per_ghost(ghosts, None, &mut released);
        released
    }

    fn release(ghosts: &mut Ghosts, personality: Personality, mode: GhostMode) {
        let ghost = &mut ghosts[personality];
        ghost.mode = mode;
        debug!(ghost = personality.as_ref(), mode = mode.as_ref(), "Ghost released");
    }

    /// Activates the counter of the most preferred waiting ghost.
    ///
    /// `carry` seeds the newly active counter with the dots counted by the ghost that
    /// just left, so limits read as running totals. Ghosts whose limit is met are released
    /// on the spot and the next one is armed, until a counter is left waiting or the
    /// house is empty.
    fn arm_per_ghost(&mut self, ghosts: &mut Ghosts, mut carry: Option<u32>, released: &mut Released) {
        loop {
            let Some(personality) = ghosts.first_waiting() else {
                self.active = ActiveCounter::None;
                return;
            };

            let counter = &mut ghosts[personality].dot_counter;
            if let Some(count) = carry {
                counter.force_count(counter.count().max(count));
            }
            counter.set_limit(counter.limit());
            counter.set_action(CounterAction::Release);
            self.active = ActiveCounter::Ghost(personality);

            if !counter.is_satisfied() {
                return;
            }

            carry = Some(counter.count());
            Self::release(ghosts, personality, GhostMode::Scatter);
            released.push(personality);
        }
    }
}
