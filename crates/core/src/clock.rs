//! Tick clock - the single gravity timer
//!
//! The clock has one slot. [`TickClock::arm`] replaces whatever was armed and
//! [`TickClock::stop`] empties the slot, so two timers can never run at once.
//! The owner feeds elapsed time in and pulls due ticks out; nothing here
//! sleeps or spawns.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    interval_ms: u32,
    elapsed_ms: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickClock {
    armed: Option<Armed>,
    /// Incremented on every arm; lets callers notice a restart.
    generation: u32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any running timer and start a fresh one with `interval_ms`.
    ///
    /// A zero interval is clamped to 1ms so the clock can always make progress.
    pub fn arm(&mut self, interval_ms: u32) {
        self.armed = Some(Armed {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        });
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn stop(&mut self) {
        self.armed = None;
    }

    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    /// Interval of the armed timer, if any.
    pub fn interval_ms(&self) -> Option<u32> {
        self.armed.map(|a| a.interval_ms)
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Add elapsed wall time. Ignored while stopped.
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        if let Some(armed) = self.armed.as_mut() {
            armed.elapsed_ms = armed.elapsed_ms.saturating_add(elapsed_ms);
        }
    }

    /// Consume one due tick, if a full interval has elapsed.
    pub fn take_due(&mut self) -> bool {
        match self.armed.as_mut() {
            Some(armed) if armed.elapsed_ms >= armed.interval_ms => {
                armed.elapsed_ms -= armed.interval_ms;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the next tick, if armed.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed
            .map(|a| a.interval_ms.saturating_sub(a.elapsed_ms))
    }
}
