//! Runs the simulation headless with a random input walk and prints a summary.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use pacman_core::constants::LOOP_TIME;
use pacman_core::game::events::GameEvent;
use pacman_core::map::builder::Map;
use pacman_core::map::direction::Direction;
use pacman_core::{Game, Intents, SimulationConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thousands::Separable;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of ticks to simulate (60 per second of game time).
    #[arg(long, default_value_t = 60 * 60 * 5)]
    ticks: u64,
    /// Seed for player placement and the input walk.
    #[arg(long)]
    seed: Option<u64>,
    /// Maze lines, one `x0,y0,x1,y1` per line. Defaults to the classic board.
    #[arg(long, requires = "dots")]
    segments: Option<PathBuf>,
    /// Dot layout, one `x,y[,energizer]` per line.
    #[arg(long, requires = "segments")]
    dots: Option<PathBuf>,
    #[arg(long)]
    lives: Option<u8>,
    /// Level to start on.
    #[arg(long, default_value_t = 1)]
    level: u32,
    /// Pace ticks in real time instead of running as fast as possible.
    #[arg(long)]
    realtime: bool,
}

fn setup_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")
}

fn load_map(cli: &Cli, config: &SimulationConfig) -> Result<Map> {
    let (Some(segments), Some(dots)) = (&cli.segments, &cli.dots) else {
        return Map::classic().context("Failed to build the classic board");
    };

    let segment_source = std::fs::read_to_string(segments)
        .with_context(|| format!("Failed to read maze lines from {}", segments.display()))?;
    let dot_source =
        std::fs::read_to_string(dots).with_context(|| format!("Failed to read dots from {}", dots.display()))?;
    Map::from_text(&segment_source, &dot_source, config.tunnel_exits).context("Invalid maze data")
}

#[derive(Debug, Default)]
struct Tally {
    dots: u64,
    energizers: u64,
    ghosts_eaten: u64,
    deaths: u64,
    levels: u64,
}

impl Tally {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::DotEaten { .. } => self.dots += 1,
            GameEvent::PowerStarted => self.energizers += 1,
            GameEvent::GhostEaten(_) => self.ghosts_eaten += 1,
            GameEvent::PlayerDied { .. } => self.deaths += 1,
            GameEvent::LevelAdvanced(_) => self.levels += 1,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    setup_tracing()?;
    let cli = Cli::parse();

    let mut config = SimulationConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(lives) = cli.lives {
        config = config.with_starting_lives(lives);
    }

    let map = load_map(&cli, &config)?;
    info!(lines = map.graph.lines().len(), dots = map.dots.len(), "Maze loaded");

    let mut game = Game::new(map, config)?;
    if cli.level > 1 {
        game.jump_to_level(cli.level)?;
    }

    let mut walk = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
        None => SmallRng::from_os_rng(),
    };
    let mut heading = Direction::Left;
    let mut tally = Tally::default();
    let elapsed = LOOP_TIME.as_secs_f32();
    let started = Instant::now();

    let mut ticks = 0;
    while ticks < cli.ticks && !game.is_game_over() {
        let frame_start = Instant::now();

        // Turn at random now and then, and always when stuck.
        if !game.player().entity.is_moving || walk.random_bool(0.02) {
            heading = Direction::DIRECTIONS[walk.random_range(0..Direction::DIRECTIONS.len())];
        }

        let events = game.tick(Intents::from(heading), elapsed)?;
        for event in &events {
            debug!(tick = ticks, ?event, "Game event");
            tally.record(event);
        }
        ticks += 1;

        if cli.realtime {
            if let Some(remaining) = LOOP_TIME.checked_sub(frame_start.elapsed()) {
                spin_sleep::sleep(remaining);
            }
        }
    }

    info!(
        ticks = %ticks.separate_with_commas(),
        game_time = ?game.elapsed(),
        wall_time = ?started.elapsed(),
        "Simulation finished"
    );
    println!("ticks:        {}", ticks.separate_with_commas());
    println!("score:        {}", game.score().separate_with_commas());
    println!("level:        {}", game.level());
    println!("lives:        {}", game.lives());
    println!("dots eaten:   {}", tally.dots.separate_with_commas());
    println!("energizers:   {}", tally.energizers);
    println!("ghosts eaten: {}", tally.ghosts_eaten);
    println!("deaths:       {}", tally.deaths);
    println!("levels:       {}", tally.levels);
    println!("game over:    {}", game.is_game_over());
    Ok(())
}
