use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assets::frames::FrameKind;
use crate::capture::sequencer::{CaptureSequencer, SequencerState, TickEvent};
use crate::capture::snapshot::{Snapshot, SnapshotMeta};
use crate::capture::source::FrameSource;
use crate::compose::strip::compose_strip;
use crate::compose::surface::StripImage;
use crate::export::png::write_strip_png;
use crate::foundation::error::{BoothError, BoothResult};

/// One photo-booth session: the sequencer, its snapshot list, and the current
/// frame selection, owned by a single object instead of ambient globals.
#[derive(Debug, Default)]
pub struct BoothSession {
    sequencer: CaptureSequencer,
    frame: FrameKind,
}

/// Serializable summary of a session, for machine-readable CLI output.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SessionReport {
    /// Frame selected at export time.
    pub frame: FrameKind,
    /// Captured photos, in capture order.
    pub shots: Vec<SnapshotMeta>,
    /// Path of the exported strip, when one was written.
    pub output: Option<PathBuf>,
}

impl SessionReport {
    /// Pretty-printed JSON rendering, for machine-readable CLI output.
    pub fn to_json(&self) -> BoothResult<String> {
        use anyhow::Context;
        serde_json::to_string_pretty(self)
            .context("serialize session report")
            .map_err(BoothError::from)
    }
}

impl BoothSession {
    /// Build a fresh session with the default frame selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the four-photo capture sequence.
    pub fn start(&mut self) -> BoothResult<()> {
        self.sequencer.start()
    }

    /// Advance the capture sequence by one timer tick.
    pub fn tick(&mut self, now: Instant, source: &mut dyn FrameSource) -> BoothResult<TickEvent> {
        self.sequencer.tick(now, source)
    }

    /// Return to the pre-capture configuration: empty snapshot list, idle sequencer.
    /// The frame selection is kept; it is sticky across runs. Idempotent.
    pub fn reset(&mut self) {
        self.sequencer.reset();
    }

    /// Select the overlay frame. May be called at any time before a compose
    /// starts; the last selection wins.
    pub fn select_frame(&mut self, frame: FrameKind) {
        tracing::debug!(%frame, "frame selected");
        self.frame = frame;
    }

    /// Currently selected frame.
    pub fn selected_frame(&self) -> FrameKind {
        self.frame
    }

    /// Sequencer state, for UI wiring.
    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Countdown value to display, or `None` when the countdown is hidden.
    pub fn countdown(&self) -> Option<u8> {
        self.sequencer.countdown()
    }

    /// Whether the shutter flash is showing at `now`.
    pub fn shutter_active(&self, now: Instant) -> bool {
        self.sequencer.shutter_active(now)
    }

    /// Whether the capture sequence has completed.
    pub fn is_done(&self) -> bool {
        self.sequencer.is_done()
    }

    /// Photos captured so far, in capture order.
    pub fn shots(&self) -> &[Snapshot] {
        self.sequencer.shots()
    }

    /// Compose the strip from the captured photos and the frame selected right now.
    ///
    /// The selection is copied once at entry, so reselecting while a compose is in
    /// flight affects the next compose, not this one. Requires a completed sequence;
    /// an incomplete snapshot list is rejected and nothing is produced.
    pub fn compose(&self, assets_root: &Path) -> BoothResult<StripImage> {
        if !self.is_done() {
            return Err(BoothError::validation(
                "cannot compose before the capture sequence completes",
            ));
        }
        let frame = self.frame;
        compose_strip(self.sequencer.shots(), frame, assets_root)
    }

    /// Compose and export the strip as `JustFilm.png` inside `out_dir`.
    pub fn export(&self, assets_root: &Path, out_dir: &Path) -> BoothResult<PathBuf> {
        let strip = self.compose(assets_root)?;
        write_strip_png(&strip, out_dir)
    }

    /// Summarize the session, noting `output` when a strip was exported.
    pub fn report(&self, output: Option<PathBuf>) -> SessionReport {
        SessionReport {
            frame: self.frame,
            shots: self.sequencer.shots().iter().map(Snapshot::meta).collect(),
            output,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/booth.rs"]
mod tests;
