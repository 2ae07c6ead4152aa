use glam::IVec2;
use smallvec::SmallVec;

use crate::entity::ghost::{GhostMode, Personality};
use crate::systems::item::DotKind;

/// Something that happened during a tick, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    DotEaten { cell: IVec2, kind: DotKind },
    PowerStarted,
    PowerEnded,
    GhostReleased { ghost: Personality, mode: GhostMode },
    GhostEaten(Personality),
    PhaseChanged(GhostMode),
    PlayerDied { lives_left: u8 },
    BonusLife,
    LevelAdvanced(u32),
    GameOver,
    Restarted,
    DebugToggled(bool),
}

/// The events of one tick, in the order they happened.
pub type GameEvents = SmallVec<[GameEvent; 4]>;
