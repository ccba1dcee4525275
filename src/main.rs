//! Terminal falling-block runner (default binary).
//!
//! Each frame: feed elapsed time to the session, apply the commands read
//! during the previous frame, render, then wait for input until the frame
//! period is used up.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use tui_blockfall::core::{GameConfig, GameSnapshot, Session, SimpleRng};
use tui_blockfall::input::{InputEvent, InputQueue};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::FRAME_MS;

const ENV_SEED: &str = "BLOCKFALL_SEED";

/// What the last session looked like when the player quit.
struct Summary {
    game_over: bool,
    locked_pieces: u32,
    rows_cleared: u32,
    seed: u32,
}

fn main() -> Result<()> {
    let config = checked(GameConfig::from_env())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, initial_seed());

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    if summary.game_over {
        eprintln!("Game Over!");
        eprintln!(
            "[Game] pieces locked: {}, rows cleared: {}, seed: {}",
            summary.locked_pieces, summary.rows_cleared, summary.seed
        );
    }
    Ok(())
}

/// Validate before the terminal is touched. The error is reported once, by
/// `main`'s return.
fn checked(config: GameConfig) -> Result<GameConfig> {
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn initial_seed() -> u32 {
    std::env::var(ENV_SEED)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<Summary> {
    // Restarts draw their seeds from here so a single seed replays a whole run.
    let mut seeds = SimpleRng::new(seed);
    let mut session_seed = seeds.next_u32();
    let mut session = Session::new(config.clone(), SimpleRng::new(session_seed))?;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut input = InputQueue::new();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        let elapsed = frame_start.duration_since(last_tick).as_millis();
        last_tick = frame_start;

        // Clock first, then input, then draw.
        session.on_tick(elapsed.min(u32::MAX as u128) as u32);

        for event in input.drain() {
            match event {
                InputEvent::Command(command) => {
                    session.on_command(command);
                }
                InputEvent::Restart => {
                    session_seed = seeds.next_u32();
                    session = Session::new(config.clone(), SimpleRng::new(session_seed))?;
                }
                InputEvent::Resize => term.invalidate(),
                InputEvent::Quit => {
                    return Ok(Summary {
                        game_over: session.is_game_over(),
                        locked_pieces: session.locked_pieces(),
                        rows_cleared: session.rows_cleared(),
                        seed: session_seed,
                    });
                }
            }
        }

        session.render_state_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        input.poll(frame.saturating_sub(frame_start.elapsed()))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        let config = checked(GameConfig::default()).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_invalid_config_is_a_single_error() {
        let config =
            GameConfig::from_lookup(|key| (key == "BLOCKFALL_FALL_MS").then(|| "0".to_string()));
        let err = checked(config).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration");
        assert_eq!(
            err.root_cause().to_string(),
            "fall interval must be greater than zero"
        );
    }
}
