//! Integration tests for the game flow, driven through the public API

use blockfall::core::{
    AudioCue, AudioSink, Board, Game, GamePhase, GameSnapshot, Redraw, Renderer, Session,
};
use blockfall::term::{TermFrontend, TerminalRenderer, Viewport};
use blockfall::types::{Cell, InputAction, PieceKind, DIFFICULTY_TIMEOUTS, FRAME_MS};

const X: Cell = Cell::Occupied(5);

/// First seed whose opening piece is `kind`.
fn seed_opening_with(kind: PieceKind) -> u64 {
    (0..10_000)
        .find(|&seed| {
            let mut game = Game::new(seed).unwrap();
            game.start();
            game.active().map(|p| p.kind()) == Some(kind)
        })
        .expect("some seed opens with every kind")
}

/// Press down until `done` holds, with an upper bound on presses.
fn drop_until(game: &mut Game, done: impl Fn(&Game) -> bool) {
    for _ in 0..64 {
        if done(game) {
            return;
        }
        game.handle_input(InputAction::MoveDown);
    }
    panic!("condition not reached");
}

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(12345).unwrap();
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert!(game.active().is_none());

    assert!(game.handle_input(InputAction::Confirm));
    assert!(game.running());
    assert!(game.active().is_some());
    assert!(game.next().is_some());

    assert!(game.handle_input(InputAction::Confirm));
    assert!(game.paused());

    assert!(game.handle_input(InputAction::Confirm));
    assert!(game.running());
}

#[test]
fn test_gravity_follows_the_tick_interval() {
    let mut game = Game::new(7).unwrap();
    game.start();
    let y = game.active().unwrap().y();

    assert_eq!(game.advance(DIFFICULTY_TIMEOUTS[0] - 1), 0);
    assert_eq!(game.active().unwrap().y(), y);
    assert_eq!(game.advance(1), 1);
    assert_eq!(game.active().unwrap().y(), y + 1);
}

#[test]
fn test_pause_freezes_gravity_and_input() {
    let mut game = Game::new(7).unwrap();
    game.start();
    game.toggle_pause();
    let before = game.active().cloned();

    assert_eq!(game.advance(10_000), 0);
    assert!(!game.handle_input(InputAction::MoveLeft));
    assert!(!game.handle_input(InputAction::Rotate));
    assert!(!game.handle_input(InputAction::MoveDown));
    assert_eq!(game.active().cloned(), before);
}

#[test]
fn test_piece_bakes_at_the_floor() {
    let mut game = Game::new(99).unwrap();
    game.start();
    let first = game.active().unwrap().kind();
    let next = game.next().unwrap().kind();

    drop_until(&mut game, |g| g.board().occupied_count() > 0);

    assert_eq!(game.board().occupied_count(), 4);
    assert_eq!(game.active().unwrap().kind(), next);
    assert!(game
        .board()
        .cells()
        .iter()
        .filter_map(|c| c.color())
        .all(|color| color as usize == first.index()));
}

#[test]
fn test_single_line_clear_scores() {
    let seed = seed_opening_with(PieceKind::I);
    let mut board = Board::new(10, 20);
    for x in [0, 1, 2, 7, 8, 9] {
        board.set(x, 19, X);
    }
    let mut game = Game::with_board(board, seed).unwrap();
    game.start();

    drop_until(&mut game, |g| g.lines() > 0);

    assert_eq!(game.lines(), 1);
    assert_eq!(game.score(), 40);
    assert_eq!(game.difficulty(), 0);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_four_line_clear_raises_difficulty_one_step() {
    let seed = seed_opening_with(PieceKind::I);
    let mut board = Board::new(10, 20);
    for y in 16..20 {
        for x in (0..10).filter(|&x| x != 5) {
            board.set(x, y, X);
        }
    }
    let mut game = Game::with_board(board, seed).unwrap();
    game.start();
    // Vertical I stands in column 5 when spawned at x = 3.
    assert!(game.handle_input(InputAction::Rotate));

    drop_until(&mut game, |g| g.lines() > 0);

    assert_eq!(game.lines(), 4);
    assert_eq!(game.score(), 1200);
    assert_eq!(game.difficulty(), 1);
    assert_eq!(game.tick_interval_ms(), Some(DIFFICULTY_TIMEOUTS[1]));
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_blocked_spawn_ends_the_game_and_confirm_restarts() {
    let mut board = Board::new(10, 20);
    for y in 0..4 {
        for x in 0..9 {
            board.set(x, y, X);
        }
    }
    let mut game = Game::with_board(board, 3).unwrap();
    game.start();

    assert!(game.game_over());
    assert!(game.active().is_none());
    assert_eq!(game.advance(10_000), 0);
    assert!(!game.handle_input(InputAction::MoveLeft));

    assert!(game.handle_input(InputAction::Confirm));
    assert!(game.running());
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.score(), 0);
    assert!(game.active().is_some());
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        InputAction::Confirm,
        InputAction::MoveLeft,
        InputAction::Rotate,
        InputAction::MoveDown,
        InputAction::MoveRight,
    ];
    let play = || {
        let mut game = Game::new(2024).unwrap();
        for _ in 0..30 {
            for action in script {
                game.handle_input(action);
            }
            game.advance(400);
        }
        game.snapshot()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_snapshot_into_reuses_and_overwrites() {
    let mut game = Game::new(5).unwrap();
    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);
    assert!(!snap.started);
    assert_eq!(snap.board.len(), 200);

    game.start();
    game.resize(8, 16);
    game.snapshot_into(&mut snap);
    assert!(snap.running);
    assert_eq!((snap.width, snap.height), (8, 16));
    assert_eq!(snap.board.len(), 128);
    assert_eq!(snap.active.map(|p| p.kind), game.active().map(|p| p.kind()));
}

#[derive(Default)]
struct Log {
    redraws: Vec<Redraw>,
    cues: Vec<AudioCue>,
}

impl Renderer for Log {
    fn render(&mut self, _snapshot: &GameSnapshot, redraw: Redraw) {
        self.redraws.push(redraw);
    }
}

impl AudioSink for Log {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

#[test]
fn test_session_routes_events_to_collaborators() {
    let mut renderer = Log::default();
    let mut audio = Log::default();
    {
        let mut session = Session::new(Game::new(11).unwrap(), &mut renderer, &mut audio);
        session.handle_input(InputAction::Confirm);
        session.handle_input(InputAction::MoveDown);
        session.advance(FRAME_MS);
        session.handle_input(InputAction::Confirm);
    }

    assert_eq!(
        renderer.redraws,
        vec![Redraw::Full, Redraw::Full, Redraw::Incremental, Redraw::Incremental]
    );
    assert_eq!(audio.cues, vec![AudioCue::GameStarted, AudioCue::Paused]);
}

#[test]
fn test_terminal_frontend_plays_a_game() {
    let frontend = TermFrontend::new(TerminalRenderer::new(Vec::new()), Viewport::new(50, 24));
    let mut session = Session::new(Game::new(8).unwrap(), frontend, Log::default());

    session.handle_input(InputAction::Confirm);
    for _ in 0..200 {
        session.advance(100);
        session.handle_input(InputAction::MoveDown);
        if session.game().game_over() {
            break;
        }
    }
    session.renderer_mut().set_viewport(Viewport::new(30, 12));
    session.redraw();

    assert!(session.renderer_mut().take_error().is_none());
    assert!(session.audio().cues.starts_with(&[AudioCue::GameStarted]));
}
