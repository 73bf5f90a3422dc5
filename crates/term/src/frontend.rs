//! [`Renderer`] implementation that draws to a terminal.

use std::io::{self, Write};

use crate::core::{GameSnapshot, Redraw, Renderer};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Draws snapshots through a [`GameView`] and a [`TerminalRenderer`].
///
/// `Renderer::render` cannot fail, so the first I/O error is kept until the
/// run loop collects it with [`TermFrontend::take_error`].
pub struct TermFrontend<W: Write = io::Stdout> {
    view: GameView,
    terminal: TerminalRenderer<W>,
    viewport: Viewport,
    fb: FrameBuffer,
    error: Option<anyhow::Error>,
}

impl<W: Write> TermFrontend<W> {
    pub fn new(terminal: TerminalRenderer<W>, viewport: Viewport) -> Self {
        Self {
            view: GameView::default(),
            terminal,
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            error: None,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.terminal
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new terminal size. The next frame is a full repaint.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.terminal.invalidate();
    }

    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }
}

impl<W: Write> Renderer for TermFrontend<W> {
    fn render(&mut self, snapshot: &GameSnapshot, redraw: Redraw) {
        if self.error.is_some() {
            return;
        }
        if redraw == Redraw::Full {
            self.terminal.invalidate();
        }
        self.view.render_into(snapshot, self.viewport, &mut self.fb);
        if let Err(err) = self.terminal.draw_swap(&mut self.fb) {
            self.error = Some(err);
        }
    }
}
