//! The level-dependent Scatter/Chase timetable.

use std::time::Duration;

use tracing::trace;

use crate::constants::LOOP_TIME;
use crate::entity::ghost::GhostMode;

/// One timed entry of a schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub mode: GhostMode,
    pub duration: Duration,
}

impl Phase {
    const fn scatter(duration: Duration) -> Self {
        Self {
            mode: GhostMode::Scatter,
            duration,
        }
    }

    const fn chase(duration: Duration) -> Self {
        Self {
            mode: GhostMode::Chasing,
            duration,
        }
    }
}

const LEVEL_ONE: [Phase; 7] = [
    Phase::scatter(Duration::from_secs(7)),
    Phase::chase(Duration::from_secs(20)),
    Phase::scatter(Duration::from_secs(7)),
    Phase::chase(Duration::from_secs(20)),
    Phase::scatter(Duration::from_secs(5)),
    Phase::chase(Duration::from_secs(20)),
    Phase::scatter(Duration::from_secs(5)),
];

const LEVELS_TWO_TO_FOUR: [Phase; 7] = [
    Phase::scatter(Duration::from_secs(7)),
    Phase::chase(Duration::from_secs(20)),
    Phase::scatter(Duration::from_secs(7)),
    Phase::chase(Duration::from_secs(20)),
    Phase::scatter(Duration::from_secs(5)),
    Phase::chase(Duration::from_secs(1033)),
    Phase::scatter(LOOP_TIME),
];

const LATER_LEVELS: [Phase; 7] = [
    Phase::scatter(Duration::from_secs(5)),
    Phase::chase(Duration::from_secs(20)),
    Phase::scatter(Duration::from_secs(5)),
    Phase::chase(Duration::from_secs(20)),
    Phase::scatter(Duration::from_secs(5)),
    Phase::chase(Duration::from_secs(1037)),
    Phase::scatter(LOOP_TIME),
];

/// The timed phases for `level`. Every schedule ends in permanent Chasing.
pub const fn schedule_for(level: u32) -> &'static [Phase] {
    match level {
        0 | 1 => &LEVEL_ONE,
        2..=4 => &LEVELS_TWO_TO_FOUR,
        _ => &LATER_LEVELS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TimerState {
    Timed { index: usize, remaining: Duration },
    Permanent,
}

/// Walks through a level's schedule as simulation time passes.
///
/// A timer is built for one level and replaced, never reconfigured, when the level
/// changes or a life is lost. Callers stop ticking it while any ghost is Frightened, so
/// it resumes exactly where it paused.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostPhaseTimer {
    schedule: &'static [Phase],
    state: TimerState,
}

impl GhostPhaseTimer {
    pub fn for_level(level: u32) -> Self {
        let schedule = schedule_for(level);
        let state = match schedule.first() {
            Some(phase) => TimerState::Timed {
                index: 0,
                remaining: phase.duration,
            },
            None => TimerState::Permanent,
        };
        Self { schedule, state }
    }

    /// The mode of the current phase.
    pub fn mode(&self) -> GhostMode {
        match self.state {
            TimerState::Timed { index, .. } => self.schedule[index].mode,
            TimerState::Permanent => GhostMode::Chasing,
        }
    }

    /// Time left in the current phase, or `None` once Chasing is permanent.
    pub fn remaining(&self) -> Option<Duration> {
        match self.state {
            TimerState::Timed { remaining, .. } => Some(remaining),
            TimerState::Permanent => None,
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.state == TimerState::Permanent
    }

    /// Total length of the timed phases.
    pub fn total_duration(&self) -> Duration {
        self.schedule.iter().map(|phase| phase.duration).sum()
    }

    /// Advances the timer by `elapsed`.
    ///
    /// A phase ends once its full duration has passed. Time left over carries into the
    /// following phases. Returns the mode of the last phase entered, or `None` if the
    /// phase did not change.
    pub fn tick(&mut self, elapsed: Duration) -> Option<GhostMode> {
        let TimerState::Timed { mut index, mut remaining } = self.state else {
            return None;
        };

        let mut overflow = elapsed;
        let mut changed = false;
        while overflow >= remaining {
            overflow -= remaining;
            changed = true;
            index += 1;
            match self.schedule.get(index) {
                Some(phase) => remaining = phase.duration,
                None => {
                    self.state = TimerState::Permanent;
                    trace!("Permanent chase phase entered");
                    return Some(GhostMode::Chasing);
                }
            }
        }
        remaining -= overflow;

        self.state = TimerState::Timed { index, remaining };
        if changed {
            trace!(index, mode = self.schedule[index].mode.as_ref(), ?remaining, "Ghost phase changed");
            Some(self.schedule[index].mode)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_totals() {
        assert_eq!(GhostPhaseTimer::for_level(1).total_duration(), Duration::from_secs(84));
        assert!(GhostPhaseTimer::for_level(3).total_duration() > Duration::from_secs(1000));
        assert_eq!(schedule_for(5)[0].duration, Duration::from_secs(5));
    }

    #[test]
    fn test_overflow_carries_across_phases() {
        let mut timer = GhostPhaseTimer::for_level(1);
        assert_eq!(timer.tick(Duration::from_secs(30)), Some(GhostMode::Scatter));
        assert_eq!(timer.remaining(), Some(Duration::from_secs(4)));
    }

    #[test]
    fn test_phase_ends_on_its_exact_duration() {
        let mut timer = GhostPhaseTimer::for_level(1);
        assert_eq!(timer.tick(Duration::from_millis(6999)), None);
        assert_eq!(timer.tick(Duration::from_millis(1)), Some(GhostMode::Chasing));
        assert_eq!(timer.remaining(), Some(Duration::from_secs(20)));
    }
}
