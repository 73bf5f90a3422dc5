//! Collaborator traits for rendering and audio.
//!
//! Both are notified synchronously after the game state changes and must not
//! block. Neither can report failure back into the simulation; an
//! implementation that can fail keeps the error for its owner to inspect.

use crate::events::{AudioCue, Redraw};
use crate::snapshot::GameSnapshot;

pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot, redraw: Redraw);
}

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Audio sink that drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, snapshot: &GameSnapshot, redraw: Redraw) {
        (**self).render(snapshot, redraw);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue);
    }
}
