//! Game module - the piece lifecycle and game phases
//!
//! Ties the board, the shape catalog, scoring and the tick clock together:
//!
//! - pieces are spawned centered on the top row and replaced on every bake
//! - every move or rotation is validated by the board before it is applied
//! - a piece that cannot move down is baked, lines are cleared and scored
//! - a spawned piece that cannot move down ends the game
//!
//! The game never sleeps. The owner calls [`Game::advance`] with elapsed time
//! and [`Game::handle_input`] with player actions, then drains
//! [`Game::drain_events`] to notify collaborators.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::catalog::validate_config;
use crate::clock::TickClock;
use crate::error::ConfigError;
use crate::events::GameEvent;
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::scoring::{calculate_line_score, next_difficulty, tick_interval_ms};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Direction, InputAction, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    rng: PieceRng,
    phase: GamePhase,
    difficulty: u8,
    score: u32,
    lines: u32,
    clock: TickClock,
    /// Pending notifications (drained by the owner).
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a game on a default 10x20 board.
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        Self::with_board(Board::default(), seed)
    }

    /// Create a game on the given board. Fails if the built-in tables are broken.
    pub fn with_board(board: Board, seed: u64) -> Result<Self, ConfigError> {
        validate_config()?;
        Ok(Self {
            board,
            active: None,
            next: None,
            rng: PieceRng::new(seed),
            phase: GamePhase::NotStarted,
            difficulty: 0,
            score: 0,
            lines: 0,
            clock: TickClock::new(),
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// Interval of the running tick clock; `None` unless the game is running.
    pub fn tick_interval_ms(&self) -> Option<u32> {
        self.clock.interval_ms()
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        info!(seed = self.rng.seed(), "game started");
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        self.clock.arm(tick_interval_ms(self.difficulty));
        self.spawn_piece();
        true
    }

    /// Start a fresh game on the same board dimensions.
    pub fn reset(&mut self) {
        info!(score = self.score, lines = self.lines, "game reset");
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.lines = 0;
        self.difficulty = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Reset);
        self.clock.arm(tick_interval_ms(self.difficulty));
        self.spawn_piece();
    }

    /// Pause a running game, resume a paused one, or restart after game over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.clock.stop();
                self.events.push(GameEvent::Paused);
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.clock.arm(tick_interval_ms(self.difficulty));
                self.events.push(GameEvent::Resumed);
                true
            }
            GamePhase::GameOver => {
                self.reset();
                true
            }
            GamePhase::NotStarted => false,
        }
    }

    /// Start if not started, otherwise toggle pause.
    pub fn confirm(&mut self) -> bool {
        if self.phase == GamePhase::NotStarted {
            self.start()
        } else {
            self.toggle_pause()
        }
    }

    /// Apply a player action. Returns false if it was rejected.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Rotate => self.try_move(Move::Rotate),
            InputAction::MoveLeft => self.try_move(Move::Left),
            InputAction::MoveRight => self.try_move(Move::Right),
            InputAction::MoveDown => self.move_down(),
            InputAction::Confirm => self.confirm(),
        }
    }

    /// Try to apply `mv` to the active piece
    pub fn try_move(&mut self, mv: Move) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if !self.board.is_valid_move(piece, mv) {
            trace!(?mv, "move rejected");
            return false;
        }
        piece.apply(mv);
        self.events.push(GameEvent::PieceMoved);
        true
    }

    /// Move the active piece down, baking it if it cannot move.
    pub fn move_down(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.step_down()
    }

    /// One gravity step. Does nothing unless running.
    pub fn tick(&mut self) -> bool {
        self.move_down()
    }

    /// Feed elapsed time to the clock and run every tick that became due.
    ///
    /// Stops early if a tick pauses, ends or re-arms the clock.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.clock.accumulate(elapsed_ms);
        let mut ticks = 0;
        while self.clock.take_due() {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Resize the board, keeping the cells that still fit.
    pub fn resize(&mut self, width: usize, height: usize) {
        info!(width, height, "board resized");
        self.board.resize(width, height);
        self.events.push(GameEvent::BoardResized { width, height });
    }

    /// Take the pending events, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(PieceSnapshot::from);
        out.next = self.next.as_ref().map(PieceSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.difficulty = self.difficulty;
        out.started = self.started();
        out.running = self.running();
        out.paused = self.paused();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn step_down(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if self.board.is_valid_move(piece, Move::Down) {
            piece.translate(Direction::Down);
            self.events.push(GameEvent::PieceMoved);
        } else {
            self.bake_active();
        }
        true
    }

    /// Promote the next piece (or draw one) and place it at the spawn point.
    fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(next) => next.kind(),
            None => self.rng.next_kind(),
        };
        self.next = Some(Piece::new(self.rng.next_kind()));

        let piece = Piece::spawn(kind, self.board.width());
        // A spawn that overlaps the stack ends the game even if it could fall.
        if !self.board.fits(&piece) || !self.board.is_valid_move(&piece, Move::Down) {
            self.enter_game_over();
            return false;
        }

        debug!(kind = kind.as_str(), x = piece.x(), "piece spawned");
        self.active = Some(piece);
        self.events.push(GameEvent::PieceSpawned { kind });
        true
    }

    fn bake_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let completed = self.board.bake_piece(&piece);
        let cleared = self.board.clear_lines(&completed);
        self.events.push(GameEvent::PieceBaked {
            lines_cleared: cleared,
        });

        if cleared > 0 {
            self.lines += cleared as u32;
            self.award_lines(cleared);
        }
        self.spawn_piece();
    }

    fn award_lines(&mut self, cleared: usize) {
        let points = calculate_line_score(cleared, self.difficulty);
        self.score = self.score.saturating_add(points);
        debug!(cleared, points, score = self.score, "lines cleared");

        let next = next_difficulty(self.difficulty, self.score);
        if next != self.difficulty {
            self.difficulty = next;
            self.clock.arm(tick_interval_ms(next));
            self.events.push(GameEvent::DifficultyChanged { difficulty: next });
            debug!(difficulty = next, "difficulty increased");
        }
    }

    fn enter_game_over(&mut self) {
        info!(score = self.score, lines = self.lines, "game over");
        self.phase = GamePhase::GameOver;
        self.active = None;
        self.clock.stop();
        self.events.push(GameEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Cell, PieceKind, DIFFICULTY_TIMEOUTS, LINE_SCORES, MAX_DIFFICULTY, SCORE_PER_LEVEL,
    };

    const X: Cell = Cell::Occupied(0);

    fn running_game() -> Game {
        let mut game = Game::new(12345).unwrap();
        game.start();
        game.drain_events().for_each(drop);
        game
    }

    fn place(game: &mut Game, kind: PieceKind, x: i32, y: i32) {
        game.active = Some(Piece::at(kind, x, y));
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(12345).unwrap();
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(!game.started());
        assert_eq!(game.score(), 0);
        assert_eq!(game.difficulty(), 0);
        assert!(game.active().is_none());
        assert!(game.next().is_none());
        assert!(!game.clock().is_running());
    }

    #[test]
    fn test_start_spawns_pair_and_arms_clock() {
        let mut game = Game::new(12345).unwrap();
        assert!(game.start());
        assert!(game.running());
        assert!(game.active().is_some());
        assert!(game.next().is_some());
        assert_eq!(game.tick_interval_ms(), Some(DIFFICULTY_TIMEOUTS[0]));

        let events: Vec<_> = game.drain_events().collect();
        assert_eq!(events[0], GameEvent::Started);
        assert!(matches!(events[1], GameEvent::PieceSpawned { .. }));

        assert!(!game.start());
    }

    #[test]
    fn test_inputs_ignored_before_start() {
        let mut game = Game::new(1).unwrap();
        assert!(!game.handle_input(InputAction::MoveLeft));
        assert!(!game.handle_input(InputAction::MoveDown));
        assert!(!game.tick());
        assert_eq!(game.advance(10_000), 0);
        assert!(game.handle_input(InputAction::Confirm));
        assert!(game.running());
    }

    #[test]
    fn test_next_piece_becomes_active() {
        let mut game = running_game();
        let upcoming = game.next().unwrap().kind();
        place(&mut game, PieceKind::O, 4, 18);
        assert!(game.tick());
        assert_eq!(game.active().unwrap().kind(), upcoming);
        assert_eq!(game.active().unwrap().y(), 0);
    }

    #[test]
    fn test_o_piece_falls_to_floor() {
        let mut game = running_game();
        game.active = Some(Piece::spawn(PieceKind::O, 10));
        assert_eq!(game.active().unwrap().x(), 4);

        for _ in 0..18 {
            assert!(game.try_move(Move::Down));
        }
        assert!(!game.try_move(Move::Down));
        assert_eq!(game.active().unwrap().y(), 18);

        game.tick();
        let board = game.board();
        assert_eq!(board.occupied_count(), 4);
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(board.get(x, y), Some(Cell::Occupied(3)));
        }
    }

    #[test]
    fn test_wall_collisions() {
        let mut game = running_game();
        place(&mut game, PieceKind::T, 0, 5);
        assert!(!game.handle_input(InputAction::MoveLeft));
        assert_eq!(game.active().unwrap().x(), 0);

        place(&mut game, PieceKind::T, 10 - 3, 5);
        assert!(!game.handle_input(InputAction::MoveRight));
        assert_eq!(game.active().unwrap().x(), 7);
        assert!(game.handle_input(InputAction::MoveLeft));
    }

    #[test]
    fn test_rotation_is_validated() {
        let mut game = running_game();
        // I piece lying flat on the floor cannot stand up.
        place(&mut game, PieceKind::I, 3, 18);
        assert!(!game.handle_input(InputAction::Rotate));
        assert_eq!(game.active().unwrap().rotation(), crate::types::Rotation::R0);

        place(&mut game, PieceKind::I, 3, 5);
        assert!(game.handle_input(InputAction::Rotate));
        assert_eq!(game.active().unwrap().rotation(), crate::types::Rotation::R1);
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut board = Board::default();
        for y in 0..3 {
            for x in 1..10 {
                board.set(x, y, X);
            }
        }
        let mut game = Game::with_board(board, 7).unwrap();
        assert!(game.start());
        assert!(game.game_over());
        assert!(game.active().is_none());
        assert!(!game.clock().is_running());
        assert!(game.drain_events().any(|e| e == GameEvent::GameOver));
        assert_eq!(game.advance(5_000), 0);
    }

    #[test]
    fn test_spawn_overlapping_top_row_ends_game() {
        // Row 0 blocked under every spawn position, rows below free.
        let mut board = Board::default();
        for x in 3..7 {
            board.set(x, 0, X);
        }
        for seed in 0..50 {
            let mut game = Game::with_board(board.clone(), seed).unwrap();
            game.start();
            match game.active() {
                Some(piece) => assert!(game.board().fits(piece), "seed {seed}"),
                None => assert!(game.game_over()),
            }
        }

        let o_seed = (0..10_000)
            .find(|&seed| {
                let mut rng = PieceRng::new(seed);
                rng.next_kind() == PieceKind::O
            })
            .unwrap();
        let mut game = Game::with_board(board, o_seed).unwrap();
        game.start();
        assert!(game.game_over());
        assert!(game.active().is_none());
    }

    #[test]
    fn test_zero_size_board_ends_game() {
        let mut game = Game::with_board(Board::new(0, 0), 3).unwrap();
        game.start();
        assert!(game.game_over());
        assert!(game.active().is_none());
    }

    #[test]
    fn test_line_clear_scores_and_levels_up() {
        let mut game = running_game();
        game.score = SCORE_PER_LEVEL[0] - 10;
        for x in 0..8 {
            game.board.set(x, 19, X);
            game.board.set(x, 18, X);
        }
        let generation = game.clock().generation();

        // O piece fills the gap in rows 18 and 19.
        place(&mut game, PieceKind::O, 8, 18);
        game.tick();

        assert_eq!(game.lines(), 2);
        assert_eq!(game.score(), SCORE_PER_LEVEL[0] - 10 + LINE_SCORES[1]);
        assert_eq!(game.difficulty(), 1);
        assert_eq!(game.tick_interval_ms(), Some(DIFFICULTY_TIMEOUTS[1]));
        assert_eq!(game.clock().generation(), generation + 1);
        assert_eq!(game.board().occupied_count(), 0);

        let events: Vec<_> = game.drain_events().collect();
        assert!(events.contains(&GameEvent::PieceBaked { lines_cleared: 2 }));
        assert!(events.contains(&GameEvent::DifficultyChanged { difficulty: 1 }));
    }

    #[test]
    fn test_score_at_threshold_does_not_level_up() {
        let mut game = running_game();
        game.score = SCORE_PER_LEVEL[0] - LINE_SCORES[0];
        for x in 0..9 {
            game.board.set(x, 19, X);
        }
        // Vertical I uses mask column 2, so it stands in x = 9, rows 16..20.
        place(&mut game, PieceKind::I, 7, 16);
        game.active.as_mut().unwrap().rotate();
        assert!(!game.try_move(Move::Down));
        game.tick();

        assert_eq!(game.score(), SCORE_PER_LEVEL[0]);
        assert_eq!(game.difficulty(), 0);
    }

    #[test]
    fn test_difficulty_caps_at_max() {
        let mut game = running_game();
        game.difficulty = MAX_DIFFICULTY;
        game.award_lines(4);
        assert_eq!(game.difficulty(), MAX_DIFFICULTY);
        assert_eq!(game.score(), LINE_SCORES[3] * 10);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut game = running_game();
        let active = game.active().cloned();

        assert!(game.toggle_pause());
        assert!(game.paused());
        assert!(!game.clock().is_running());
        assert!(!game.handle_input(InputAction::MoveLeft));
        assert!(!game.tick());
        assert_eq!(game.advance(60_000), 0);
        assert_eq!(game.active().cloned(), active);

        assert!(game.handle_input(InputAction::Confirm));
        assert!(game.running());
        assert_eq!(game.tick_interval_ms(), Some(DIFFICULTY_TIMEOUTS[0]));

        let events: Vec<_> = game.drain_events().collect();
        assert_eq!(events, vec![GameEvent::Paused, GameEvent::Resumed]);
    }

    #[test]
    fn test_confirm_after_game_over_resets() {
        let mut game = running_game();
        game.score = 900;
        game.enter_game_over();
        assert!(game.game_over());

        assert!(game.handle_input(InputAction::Confirm));
        assert!(game.running());
        assert_eq!(game.score(), 0);
        assert!(game.active().is_some());
        assert!(game.clock().is_running());
    }

    #[test]
    fn test_reset_clears_state() {
        let mut game = running_game();
        game.score = 4000;
        game.lines = 30;
        game.difficulty = 5;
        game.board.set(0, 19, X);

        game.reset();
        assert!(game.running());
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.difficulty(), 0);
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.tick_interval_ms(), Some(DIFFICULTY_TIMEOUTS[0]));
        assert!(game.active().is_some());
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut game = running_game();
        let y = game.active().unwrap().y();
        let interval = DIFFICULTY_TIMEOUTS[0];

        assert_eq!(game.advance(interval - 1), 0);
        assert_eq!(game.advance(1), 1);
        assert_eq!(game.active().unwrap().y(), y + 1);
        assert_eq!(game.advance(interval * 3), 3);
        assert_eq!(game.active().unwrap().y(), y + 4);
    }

    #[test]
    fn test_advance_stops_when_clock_rearmed() {
        let mut game = running_game();
        game.score = SCORE_PER_LEVEL[0];
        for x in 0..8 {
            game.board.set(x, 19, X);
            game.board.set(x, 18, X);
        }
        place(&mut game, PieceKind::O, 8, 18);

        // The first tick bakes and levels up; the re-armed clock starts from zero.
        let ticks = game.advance(DIFFICULTY_TIMEOUTS[0] * 5);
        assert_eq!(ticks, 1);
        assert_eq!(game.difficulty(), 1);
        assert_eq!(game.clock().remaining_ms(), Some(DIFFICULTY_TIMEOUTS[1]));
    }

    #[test]
    fn test_resize_keeps_game_running() {
        let mut game = running_game();
        game.resize(12, 22);
        assert_eq!(game.board().width(), 12);
        assert!(game
            .drain_events()
            .any(|e| e == GameEvent::BoardResized { width: 12, height: 22 }));

        game.resize(0, 0);
        place(&mut game, PieceKind::O, 0, 0);
        game.tick();
        assert!(game.game_over());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = running_game();
        game.board.set(2, 19, Cell::Occupied(6));
        let snap = game.snapshot();
        assert_eq!((snap.width, snap.height), (10, 20));
        assert_eq!(snap.cell(2, 19), Cell::Occupied(6));
        assert!(snap.started && snap.running && !snap.paused && !snap.game_over);
        assert_eq!(snap.active.unwrap().kind, game.active().unwrap().kind());
        assert_eq!(snap.next.unwrap().kind, game.next().unwrap().kind());
    }
}
