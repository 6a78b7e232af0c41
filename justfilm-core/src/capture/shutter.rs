use std::time::Instant;

use crate::foundation::geometry::SHUTTER_FLASH;

/// Fire-and-forget shutter flash cue.
///
/// Firing arms a fixed 200 ms window; nothing in the engine blocks on it. The cue
/// is a pure function of the instants passed in, so the sequencer stays clock-free
/// and tests can fabricate time.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShutterCue {
    fired_at: Option<Instant>,
}

impl ShutterCue {
    /// Build an idle cue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the flash window starting at `now`. Re-firing restarts the window.
    pub fn fire(&mut self, now: Instant) {
        self.fired_at = Some(now);
    }

    /// Whether the flash is showing at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        match self.fired_at {
            Some(at) => now.duration_since(at) < SHUTTER_FLASH,
            None => false,
        }
    }

    /// Clear the cue back to idle.
    pub fn reset(&mut self) {
        self.fired_at = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/shutter.rs"]
mod tests;
