//! Blockfall terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `blockfall-term`. All game mutation goes through one [`Session`].

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::config::RunConfig;
use blockfall::core::{AudioCue, AudioSink, Board, Game, Session};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{TermFrontend, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// Audio sink that only logs cues. There is no sound output in a terminal.
struct TraceAudio;

impl AudioSink for TraceAudio {
    fn play(&mut self, cue: AudioCue) {
        info!(cue = cue.as_str(), "audio cue");
    }
}

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    info!(
        seed = config.seed,
        width = config.board_width,
        height = config.board_height,
        "starting"
    );

    let board = Board::new(config.board_width, config.board_height);
    let game = Game::with_board(board, config.seed)?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut terminal = TerminalRenderer::stdout();
    terminal.enter()?;

    let frontend = TermFrontend::new(terminal, Viewport::new(w, h));
    let mut session = Session::new(game, frontend, TraceAudio);
    let result = run(&mut session);

    // Always try to restore terminal state.
    let (game, mut frontend, _) = session.into_parts();
    let _ = frontend.terminal_mut().exit();
    info!(score = game.score(), lines = game.lines(), "exiting");
    result
}

fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_new(&config.log_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn run(session: &mut Session<TermFrontend, TraceAudio>) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last = Instant::now();

    loop {
        if let Some(err) = session.renderer_mut().take_error() {
            return Err(err);
        }

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.handle_input(action);
                    }
                }
                Event::Resize(w, h) => {
                    session.renderer_mut().set_viewport(Viewport::new(w, h));
                    session.redraw();
                }
                _ => {}
            }
        }

        // Only whole milliseconds are consumed; the remainder carries over.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms > 0 {
            last += Duration::from_millis(elapsed_ms as u64);
            session.advance(elapsed_ms);
        }
    }
}
