//! Pluggable ghost behavior.
//!
//! Target selection and chase movement are strategies supplied by the host, one per
//! personality. The simulation only decides when they run.

use std::fmt;

use glam::IVec2;

use crate::entity::ghost::{Ghost, Personality};
use crate::entity::player::Player;
use crate::error::NavigationError;
use crate::map::graph::NavigationGraph;

/// Read-only view of the world handed to ghost behaviors.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorContext<'a> {
    pub graph: &'a NavigationGraph,
    pub player: &'a Player,
    pub player_cell: IVec2,
    pub level: u32,
    /// Global movement step, for behaviors that move their ghost with
    /// [`try_move`](crate::systems::movement::try_move).
    pub move_step: f32,
}

/// Per-personality ghost strategy.
pub trait GhostBehavior: fmt::Debug {
    /// Called when the ghost leaves the house. Returns the cell it should head for.
    fn select_target(&mut self, ghost: &Ghost, ctx: &BehaviorContext<'_>) -> Option<IVec2> {
        let _ = (ghost, ctx);
        None
    }

    /// Called once per tick for every ghost, before collisions are checked.
    fn tick(&mut self, ghost: &mut Ghost, ctx: &BehaviorContext<'_>) -> Result<(), NavigationError> {
        let _ = (ghost, ctx);
        Ok(())
    }
}

/// A behavior that never picks a target and never moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleBehavior;

impl GhostBehavior for IdleBehavior {}

/// One behavior per personality.
#[derive(Debug)]
pub struct GhostBehaviors([Box<dyn GhostBehavior>; 4]);

impl GhostBehaviors {
    /// Every ghost idles.
    pub fn idle() -> Self {
        Self(std::array::from_fn(|_| Box::new(IdleBehavior) as Box<dyn GhostBehavior>))
    }

    /// Replaces the behavior of one personality.
    pub fn with(mut self, personality: Personality, behavior: impl GhostBehavior + 'static) -> Self {
        self.0[personality.index()] = Box::new(behavior);
        self
    }

    pub fn get_mut(&mut self, personality: Personality) -> &mut dyn GhostBehavior {
        self.0[personality.index()].as_mut()
    }
}

impl Default for GhostBehaviors {
    fn default() -> Self {
        Self::idle()
    }
}
