//! The simulation rules, one concern per module.
//!
//! Every system here is a plain function or a small state machine; the per-tick order is
//! decided by [`crate::game::Game`].

pub mod counter;
pub mod ghost;
pub mod item;
pub mod movement;
pub mod phase;
pub mod release;

pub use self::counter::DotCounter;
pub use self::ghost::{BehaviorContext, GhostBehavior, GhostBehaviors, IdleBehavior};
pub use self::item::{Dot, DotField, DotKind, DotSpec};
pub use self::movement::try_move;
pub use self::phase::{GhostPhaseTimer, Phase};
pub use self::release::{ActiveCounter, GhostReleaseModel, Released};
