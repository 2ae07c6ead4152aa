//! This module contains the main game logic and state.

pub mod events;
pub mod state;

use std::time::Duration;

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use tracing::{debug, info, trace};

use crate::config::SimulationConfig;
use crate::constants::release::forced_release_timeout;
use crate::entity::ghost::{Ghost, GhostMode, Ghosts, Personality};
use crate::entity::location::LocationInfo;
use crate::entity::player::Player;
use crate::error::{GameError, GameResult, MapError};
use crate::game::events::{GameEvent, GameEvents};
use crate::game::state::{ActorSnapshot, GhostSnapshot, Snapshot};
use crate::input::Intents;
use crate::map::builder::Map;
use crate::map::graph::NavigationGraph;
use crate::systems::ghost::{BehaviorContext, GhostBehaviors};
use crate::systems::item::{Dot, DotField};
use crate::systems::movement::try_move;
use crate::systems::phase::GhostPhaseTimer;
use crate::systems::release::{GhostReleaseModel, Released};

/// The simulation: every piece of mutable game state, advanced one tick at a time.
///
/// All mutation flows through [`Game::tick`]; everything else is a read-only query,
/// apart from a few placement helpers meant for tests and debugging tools.
#[derive(Debug)]
pub struct Game {
    config: SimulationConfig,
    graph: NavigationGraph,
    dots: DotField,
    player: Player,
    ghosts: Ghosts,
    release: GhostReleaseModel,
    phase_timer: GhostPhaseTimer,
    behaviors: GhostBehaviors,
    rng: SmallRng,
    clock: Duration,
    time_last_dot_eaten: Duration,
    level: u32,
    game_over: bool,
    debug_mode: bool,
}

impl Game {
    /// Creates a simulation where every ghost idles.
    pub fn new(map: Map, config: SimulationConfig) -> GameResult<Game> {
        Self::with_behaviors(map, config, GhostBehaviors::idle())
    }

    /// Creates a simulation with the given ghost behaviors and starts level 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the dot layout has duplicates or a ghost spawn cell is not on
    /// the maze.
    pub fn with_behaviors(map: Map, config: SimulationConfig, behaviors: GhostBehaviors) -> GameResult<Game> {
        let Map { graph, dots, .. } = map;
        let dots = DotField::new(dots)?;

        let mut spawns = [LocationInfo::new(0, 0.0); 4];
        for personality in Personality::iter() {
            let cell = config.spawns.get(personality);
            spawns[personality.index()] = graph.locate(cell).map_err(|_| MapError::SpawnOffGraph {
                entity: personality.into(),
                cell,
            })?;
        }

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let (location, orientation) = graph.random_location(&mut rng);
        let player = Player::new(location, orientation, config.starting_lives);

        let mut game = Game {
            phase_timer: GhostPhaseTimer::for_level(1),
            ghosts: Ghosts::new(spawns),
            release: GhostReleaseModel::new(),
            player,
            config,
            graph,
            dots,
            behaviors,
            rng,
            clock: Duration::ZERO,
            time_last_dot_eaten: Duration::ZERO,
            level: 1,
            game_over: false,
            debug_mode: false,
        };
        game.reset(&mut GameEvents::new())?;
        Ok(game)
    }

    /// Advances the simulation by one tick.
    ///
    /// `intents` are the inputs held during this tick and `elapsed` is the time since the
    /// previous tick, in seconds. Movement advances a fixed step per tick; timers use
    /// `elapsed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidElapsed`] for a negative or non-finite `elapsed`, and
    /// navigation errors when the maze data is inconsistent. Any error leaves the
    /// simulation in an unspecified state and should halt it.
    pub fn tick(&mut self, intents: Intents, elapsed: f32) -> GameResult<GameEvents> {
        let delta = Duration::try_from_secs_f32(elapsed).map_err(|_| GameError::InvalidElapsed(elapsed))?;
        let mut events = GameEvents::new();

        self.player.entity.is_moving = false;
        if self.game_over {
            return Ok(events);
        }

        if intents.contains(Intents::DEBUG) {
            self.debug_mode = !self.debug_mode;
            debug!(debug_mode = self.debug_mode, "Debug mode toggled");
            events.push(GameEvent::DebugToggled(self.debug_mode));
            return Ok(events);
        }

        if intents.contains(Intents::RESTART) {
            info!("Restarting game");
            events.push(GameEvent::Restarted);
            self.reset(&mut events)?;
            return Ok(events);
        }

        self.clock += delta;

        let mut moved = false;
        for direction in intents.directions() {
            if try_move(direction, &mut self.player.entity, &self.graph, self.config.move_step)? {
                moved = true;
                break;
            }
        }

        let mut dot_eaten = false;
        if moved {
            self.player.entity.is_moving = true;
            let cell = self.player.entity.grid_location(&self.graph)?;
            if let Some(dot) = self.dots.consume(cell) {
                dot_eaten = true;
                self.eat_dot(dot, &mut events)?;
            }
        }

        if !dot_eaten {
            self.check_forced_release(&mut events)?;
        }

        self.run_ghosts()?;
        self.resolve_collisions(&mut events)?;
        if self.game_over {
            return Ok(events);
        }

        if self.player.power_expired(self.clock, self.config.power_duration) {
            debug!("Power mode ended");
            self.player.end_power();
            self.ghosts.set_living_mode(GhostMode::Scatter);
            events.push(GameEvent::PowerEnded);
        }

        if !self.ghosts.any_frightened() {
            if let Some(mode) = self.phase_timer.tick(delta) {
                debug!(mode = mode.as_ref(), "Ghost phase changed");
                self.ghosts.set_living_mode(mode);
                events.push(GameEvent::PhaseChanged(mode));
            }
        }

        Ok(events)
    }

    /// Resets the whole simulation to the start of level 1.
    fn reset(&mut self, events: &mut GameEvents) -> GameResult<()> {
        self.level = 1;
        self.game_over = false;
        self.player = Player::new(
            self.player.entity.location,
            self.player.entity.orientation,
            self.config.starting_lives,
        );
        self.start_level(events)
    }

    /// Starts `self.level` from scratch: fresh dots, ghosts home, player placed randomly.
    fn start_level(&mut self, events: &mut GameEvents) -> GameResult<()> {
        self.dots.reset();
        self.ghosts.rehome_all();
        self.player.end_power();
        self.place_player_randomly();
        self.time_last_dot_eaten = self.clock;
        self.restart_phase_timer();

        let released = self.release.begin_level(&mut self.ghosts, self.level);
        self.ghosts_released(&released, events)
    }

    fn advance_level(&mut self, events: &mut GameEvents) -> GameResult<()> {
        self.level += 1;
        info!(level = self.level, score = self.player.score, "Level complete");
        events.push(GameEvent::LevelAdvanced(self.level));
        self.start_level(events)
    }

    fn place_player_randomly(&mut self) {
        let (location, orientation) = self.graph.random_location(&mut self.rng);
        self.player.entity.location = location;
        self.player.entity.orientation = orientation;
        trace!(line = location.line(), position = location.position(), "Player placed");
    }

    fn restart_phase_timer(&mut self) {
        self.phase_timer = GhostPhaseTimer::for_level(self.level);
        self.ghosts.set_living_mode(self.phase_timer.mode());
    }

    fn eat_dot(&mut self, dot: Dot, events: &mut GameEvents) -> GameResult<()> {
        self.time_last_dot_eaten = self.clock;
        events.push(GameEvent::DotEaten {
            cell: dot.position,
            kind: dot.kind,
        });

        if self.player.add_score(dot.kind.score_value(), self.config.bonus_life_score) {
            info!(score = self.player.score, lives = self.player.lives, "Bonus life awarded");
            events.push(GameEvent::BonusLife);
        }

        let released = self.release.dot_eaten(&mut self.ghosts);
        self.ghosts_released(&released, events)?;

        if dot.is_energizer() && self.level < self.config.power_level_cutoff {
            debug!(cell = ?dot.position, "Power mode started");
            self.player.start_power(self.clock);
            self.ghosts.set_living_mode(GhostMode::Frightened);
            events.push(GameEvent::PowerStarted);
        }

        if self.dots.all_eaten() {
            self.advance_level(events)?;
        }
        Ok(())
    }

    fn check_forced_release(&mut self, events: &mut GameEvents) -> GameResult<()> {
        let idle = self.clock.saturating_sub(self.time_last_dot_eaten);
        if idle <= forced_release_timeout(self.level) {
            return Ok(());
        }

        self.time_last_dot_eaten = self.clock;
        let released = self.release.force_release(&mut self.ghosts);
        self.ghosts_released(&released, events)
    }

    /// Lets every released ghost pick a target and reports it.
    fn ghosts_released(&mut self, released: &Released, events: &mut GameEvents) -> GameResult<()> {
        if released.is_empty() {
            return Ok(());
        }

        let ctx = BehaviorContext {
            graph: &self.graph,
            player: &self.player,
            player_cell: self.player.entity.grid_location(&self.graph)?,
            level: self.level,
            move_step: self.config.move_step,
        };
        for &personality in released {
            let ghost = &mut self.ghosts[personality];
            ghost.target = self.behaviors.get_mut(personality).select_target(ghost, &ctx);
            events.push(GameEvent::GhostReleased {
                ghost: personality,
                mode: ghost.mode,
            });
        }
        Ok(())
    }

    fn run_ghosts(&mut self) -> GameResult<()> {
        let ctx = BehaviorContext {
            graph: &self.graph,
            player: &self.player,
            player_cell: self.player.entity.grid_location(&self.graph)?,
            level: self.level,
            move_step: self.config.move_step,
        };
        for personality in Personality::iter() {
            self.behaviors
                .get_mut(personality)
                .tick(&mut self.ghosts[personality], &ctx)?;
        }
        Ok(())
    }

    /// Eats or dies on every living ghost sharing the player's cell.
    fn resolve_collisions(&mut self, events: &mut GameEvents) -> GameResult<()> {
        let player_cell = self.player.entity.grid_location(&self.graph)?;
        for personality in Personality::iter() {
            let ghost = &self.ghosts[personality];
            if !ghost.is_alive() || ghost.entity.grid_location(&self.graph)? != player_cell {
                continue;
            }

            if self.player.can_eat_ghosts {
                debug!(ghost = personality.as_ref(), cell = ?player_cell, "Ghost eaten");
                self.release.ghost_eaten(&mut self.ghosts, personality);
                events.push(GameEvent::GhostEaten(personality));
            } else {
                self.lose_life(personality, events);
                break;
            }
        }
        Ok(())
    }

    fn lose_life(&mut self, killer: Personality, events: &mut GameEvents) {
        self.player.lives = self.player.lives.saturating_sub(1);
        debug!(ghost = killer.as_ref(), lives = self.player.lives, "Player caught");
        events.push(GameEvent::PlayerDied {
            lives_left: self.player.lives,
        });

        if self.player.lives == 0 {
            info!(score = self.player.score, level = self.level, "Game over");
            self.game_over = true;
            events.push(GameEvent::GameOver);
            return;
        }

        self.ghosts.rehome_all();
        self.restart_phase_timer();
        self.release.begin_life();
    }

    /// Restarts the game at `level`, as if every earlier level had been cleared.
    ///
    /// Score and lives are kept.
    pub fn jump_to_level(&mut self, level: u32) -> GameResult<GameEvents> {
        let mut events = GameEvents::new();
        self.level = level.max(1);
        self.game_over = false;
        info!(level = self.level, "Jumping to level");
        events.push(GameEvent::LevelAdvanced(self.level));
        self.start_level(&mut events)?;
        Ok(events)
    }

    /// Moves the player onto `cell`.
    pub fn place_player(&mut self, cell: IVec2) -> GameResult<()> {
        self.player.entity.location = self.graph.locate(cell)?;
        Ok(())
    }

    /// Moves a ghost onto `cell` and sets its mode.
    pub fn place_ghost(&mut self, personality: Personality, cell: IVec2, mode: GhostMode) -> GameResult<()> {
        let ghost = &mut self.ghosts[personality];
        ghost.entity.location = self.graph.locate(cell)?;
        ghost.mode = mode;
        Ok(())
    }

    /// Captures everything a renderer needs.
    pub fn snapshot(&self) -> GameResult<Snapshot> {
        let ghosts = self
            .ghosts
            .iter()
            .map(|ghost| GhostSnapshot::capture(ghost, &self.graph))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Snapshot {
            player: ActorSnapshot::capture(&self.player.entity, &self.graph)?,
            ghosts,
            dots: self
                .dots
                .iter()
                .filter(|dot| !dot.eaten)
                .map(|dot| (dot.position, dot.is_energizer()))
                .collect(),
            score: self.player.score,
            lives: self.player.lives,
            level: self.level,
            can_eat_ghosts: self.player.can_eat_ghosts,
            phase: self.phase_timer.mode(),
            elapsed: self.clock,
            game_over: self.game_over,
            debug_mode: self.debug_mode,
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_cell(&self) -> GameResult<IVec2> {
        Ok(self.player.entity.grid_location(&self.graph)?)
    }

    pub fn ghosts(&self) -> &Ghosts {
        &self.ghosts
    }

    pub fn ghost(&self, personality: Personality) -> &Ghost {
        &self.ghosts[personality]
    }

    pub fn dots(&self) -> &DotField {
        &self.dots
    }

    pub fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn release_model(&self) -> &GhostReleaseModel {
        &self.release
    }

    pub fn phase_timer(&self) -> &GhostPhaseTimer {
        &self.phase_timer
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn lives(&self) -> u8 {
        self.player.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total simulation time, excluding ticks spent on debug or restart inputs.
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }
}
