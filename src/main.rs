//! Terminal Tile Typer runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `tile_typer::term`.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tile_typer::core::{Dictionary, GameSnapshot, GameState};
use tile_typer::input::{handle_key_event, mouse_click, should_quit};
use tile_typer::options::{parse_launch_args, USAGE};
use tile_typer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tile_typer::types::{ClickOutcome, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_launch_args(&args)?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    init_logging(opts.log.as_deref())?;

    // Fail before touching the terminal.
    let dictionary = opts.load_dictionary()?;
    let seed = opts.seed_or_clock();
    log::info!("starting with {} words, seed {}", dictionary.len(), seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, dictionary, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file only; stderr would draw over the alternate screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, dictionary: Dictionary, seed: u32) -> Result<()> {
    let mut game = GameState::seeded(dictionary, seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit with {} points", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    let cell = mouse_click(mouse)
                        .and_then(|(x, y)| view.layout(viewport).screen_to_board(x, y));
                    if let Some(p) = cell {
                        if game.resolve_click(p) == ClickOutcome::Wrong {
                            term.bell()?;
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.advance_time(TICK_MS);
        }
    }
}
