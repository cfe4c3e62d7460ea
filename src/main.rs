//! Terminal runner (default binary).
//!
//! Reads the session configuration from the command line (optionally layered over
//! a JSON file), then runs the fixed-step frame loop: poll input until the next
//! frame is due, apply intents, tick, render.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_blicblock::core::{GameConfig, GameSnapshot, GameState};
use tui_blicblock::input::{map_key, should_quit};
use tui_blicblock::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blicblock::types::Intent;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid height in cells.
    #[arg(long)]
    rows: Option<u8>,
    /// Grid width in cells.
    #[arg(long)]
    cols: Option<u8>,
    /// Number of color indices, including the empty index 0.
    #[arg(long)]
    colors: Option<u8>,
    /// Automatic steps down per second.
    #[arg(long)]
    speed: Option<u32>,
    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,
    /// Seed for colors and library shuffles. Defaults to the clock.
    #[arg(short, long)]
    seed: Option<u32>,
    /// Reshuffle shape precedence every frame.
    #[arg(long)]
    shuffle: bool,
    /// Drop rotation variants that are geometrically identical.
    #[arg(long)]
    dedup: bool,
    /// JSON file with a `GameConfig`; command line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write logs here (`RUST_LOG` filters, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open config {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
            // Keep the spawn column centered unless a config file placed it.
            if self.config.is_none() {
                config.spawn_x = (cols / 2) as i8;
            }
        }
        if let Some(colors) = self.colors {
            config.num_colors = colors;
        }
        if let Some(speed) = self.speed {
            config.fall_speed = speed;
        }
        if let Some(fps) = self.fps {
            config.frames_per_second = fps;
        }
        config.shuffle_library |= self.shuffle;
        config.dedup_library |= self.dedup;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let game = GameState::new(config, seed).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();

    let game = result?;
    info!(
        pieces_locked = game.pieces_locked(),
        shapes_cleared = game.shapes_cleared(),
        frames = game.frame(),
        "session ended"
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<GameState> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(game.config().frame_ms());
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if game.game_over() => {
                    // The final board stays up until the player leaves.
                    if should_quit(key) {
                        return Ok(game);
                    }
                }
                Event::Key(key) => {
                    if let Some(intent) = map_key(key) {
                        dirty |= game.apply_move(intent);
                        if intent == Intent::Quit {
                            return Ok(game);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= frame {
            last_tick = Instant::now();
            let was_over = game.game_over();
            dirty |= game.tick(1);
            dirty |= game.game_over() != was_over;
        }
    }
}
