//! Events emitted by the game for its collaborators.
//!
//! The game queues events while it mutates; the owner drains them after each
//! input or clock advance and fans them out to the renderer and audio sinks.

use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Reset,
    Paused,
    Resumed,
    GameOver,
    PieceSpawned { kind: PieceKind },
    PieceMoved,
    PieceBaked { lines_cleared: usize },
    DifficultyChanged { difficulty: u8 },
    BoardResized { width: usize, height: usize },
}

/// How much of the picture a renderer has to rebuild.
///
/// Ordered so that combining several events is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Redraw {
    /// Board rows did not move; redrawing changed cells is enough.
    Incremental,
    /// Rows moved, the board changed size or the palette changed.
    Full,
}

/// Named audio triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    GameStarted,
    GameOver,
    Paused,
    Resumed,
}

impl AudioCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::GameStarted => "gameStarted",
            AudioCue::GameOver => "gameOver",
            AudioCue::Paused => "paused",
            AudioCue::Resumed => "resumed",
        }
    }
}

impl GameEvent {
    pub fn redraw(&self) -> Redraw {
        match self {
            GameEvent::Started
            | GameEvent::Reset
            | GameEvent::DifficultyChanged { .. }
            | GameEvent::BoardResized { .. } => Redraw::Full,
            GameEvent::PieceBaked { lines_cleared } if *lines_cleared > 0 => Redraw::Full,
            _ => Redraw::Incremental,
        }
    }

    pub fn audio_cue(&self) -> Option<AudioCue> {
        match self {
            GameEvent::Started | GameEvent::Reset => Some(AudioCue::GameStarted),
            GameEvent::GameOver => Some(AudioCue::GameOver),
            GameEvent::Paused => Some(AudioCue::Paused),
            GameEvent::Resumed => Some(AudioCue::Resumed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bake_without_clear_is_incremental() {
        assert_eq!(
            GameEvent::PieceBaked { lines_cleared: 0 }.redraw(),
            Redraw::Incremental
        );
        assert_eq!(
            GameEvent::PieceBaked { lines_cleared: 2 }.redraw(),
            Redraw::Full
        );
    }

    #[test]
    fn test_redraw_combines_with_max() {
        let events = [
            GameEvent::PieceMoved,
            GameEvent::PieceBaked { lines_cleared: 1 },
            GameEvent::PieceSpawned { kind: PieceKind::T },
        ];
        let combined = events.iter().map(GameEvent::redraw).max();
        assert_eq!(combined, Some(Redraw::Full));
    }

    #[test]
    fn test_audio_cues() {
        assert_eq!(GameEvent::Reset.audio_cue(), Some(AudioCue::GameStarted));
        assert_eq!(GameEvent::GameOver.audio_cue(), Some(AudioCue::GameOver));
        assert_eq!(GameEvent::PieceMoved.audio_cue(), None);
        assert_eq!(AudioCue::Resumed.as_str(), "resumed");
    }
}
