//! Session - the single owner of a running game
//!
//! A session holds the [`Game`] together with its renderer and audio sink.
//! Input handlers and the frame loop both go through it, so there is exactly
//! one place that mutates the game and then notifies the collaborators.

use crate::events::Redraw;
use crate::frontend::{AudioSink, Renderer};
use crate::game::Game;
use crate::snapshot::GameSnapshot;
use crate::types::InputAction;

pub struct Session<R, A> {
    game: Game,
    renderer: R,
    audio: A,
    /// Reused across frames.
    snapshot: GameSnapshot,
}

impl<R: Renderer, A: AudioSink> Session<R, A> {
    /// Wrap a game and draw its initial state.
    pub fn new(game: Game, renderer: R, audio: A) -> Self {
        let mut session = Self {
            game,
            renderer,
            audio,
            snapshot: GameSnapshot::default(),
        };
        session.flush();
        session.redraw();
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Forward a player action, then notify collaborators.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        let accepted = self.game.handle_input(action);
        self.flush();
        accepted
    }

    /// Advance the tick clock by `elapsed_ms`, then notify collaborators.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let ticks = self.game.advance(elapsed_ms);
        self.flush();
        ticks
    }

    pub fn resize_board(&mut self, width: usize, height: usize) {
        self.game.resize(width, height);
        self.flush();
    }

    /// Force a full redraw (e.g. after the terminal was resized).
    pub fn redraw(&mut self) {
        self.game.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot, Redraw::Full);
    }

    pub fn into_parts(self) -> (Game, R, A) {
        (self.game, self.renderer, self.audio)
    }

    /// Dispatch pending events: audio cues in order, then one render.
    fn flush(&mut self) {
        let mut redraw = None;
        for event in self.game.drain_events() {
            if let Some(cue) = event.audio_cue() {
                self.audio.play(cue);
            }
            redraw = redraw.max(Some(event.redraw()));
        }

        if let Some(redraw) = redraw {
            self.game.snapshot_into(&mut self.snapshot);
            self.renderer.render(&self.snapshot, redraw);
        }
    }
}
