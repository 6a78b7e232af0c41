use std::time::Instant;

use crate::capture::shutter::ShutterCue;
use crate::capture::snapshot::Snapshot;
use crate::capture::source::FrameSource;
use crate::foundation::error::{BoothError, BoothResult};
use crate::foundation::geometry::{COUNTDOWN_START, PHOTO_COUNT, SlotIndex};

/// Capture sequencer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SequencerState {
    /// No sequence running; snapshot list is whatever the last run left behind.
    Idle,
    /// Showing the countdown value for the current cycle.
    CountingDown(u8),
    /// Performing the snapshot action. Transient: entered and left within one tick.
    Capturing,
    /// All photos captured; countdown hidden. Terminal until reset/start.
    Done,
}

/// What one timer tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TickEvent {
    /// The countdown showed this value; no capture this tick.
    Countdown(u8),
    /// The countdown reached zero and a photo was captured into `slot`.
    Captured {
        /// Slot the new photo occupies.
        slot: SlotIndex,
        /// Whether this was the final photo of the sequence.
        sequence_done: bool,
    },
}

/// State machine driving the countdown/capture loop.
///
/// The sequencer owns no timer. The caller schedules one tick per second and calls
/// [`CaptureSequencer::tick`]; on [`TickEvent::Captured`] with `sequence_done` it
/// stops. Because the schedule lives with the caller, completion and reset cannot
/// leak a running timer. Ticks arriving while the sequencer is `Idle` or `Done`
/// are sequence errors: a stray timer must be loud, not silently absorbed.
#[derive(Debug, Default)]
pub struct CaptureSequencer {
    state: SequencerState,
    shots: Vec<Snapshot>,
    shutter: ShutterCue,
}

impl Default for SequencerState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CaptureSequencer {
    /// Build an idle sequencer with an empty snapshot list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Countdown value to display, or `None` when the countdown is hidden.
    pub fn countdown(&self) -> Option<u8> {
        match self.state {
            SequencerState::CountingDown(n) => Some(n),
            _ => None,
        }
    }

    /// Photos captured so far, in capture order.
    pub fn shots(&self) -> &[Snapshot] {
        &self.shots
    }

    /// Whether the full sequence has completed.
    pub fn is_done(&self) -> bool {
        self.state == SequencerState::Done
    }

    /// Whether the shutter flash is showing at `now`.
    pub fn shutter_active(&self, now: Instant) -> bool {
        self.shutter.is_active(now)
    }

    /// Start a capture sequence: clear the snapshot list and begin the first countdown.
    ///
    /// Only legal from `Idle` or `Done`; starting over a running sequence is an error
    /// (the UI start control is hidden while a sequence runs).
    pub fn start(&mut self) -> BoothResult<()> {
        match self.state {
            SequencerState::Idle | SequencerState::Done => {
                self.shots.clear();
                self.shutter.reset();
                self.state = SequencerState::CountingDown(COUNTDOWN_START);
                tracing::debug!("capture sequence started");
                Ok(())
            }
            _ => Err(BoothError::sequence(
                "cannot start while a sequence is running",
            )),
        }
    }

    /// Return to `Idle`, clearing the snapshot list. Idempotent.
    pub fn reset(&mut self) {
        self.shots.clear();
        self.shutter.reset();
        self.state = SequencerState::Idle;
    }

    /// Advance the sequence by one timer tick.
    ///
    /// Each tick of a cycle reports the visible countdown value, counting
    /// 3, 2, 1, 0; on the zero tick the snapshot action fires: the shutter cue is
    /// armed (fire-and-forget), the current frame is grabbed from `source`,
    /// rasterized, encoded and appended. After the fourth photo the sequencer is
    /// `Done` and the countdown is hidden.
    ///
    /// A failed grab aborts the sequence back to `Idle`; partial shots are kept
    /// cleared on the next `start`.
    #[tracing::instrument(skip(self, now, source))]
    pub fn tick(&mut self, now: Instant, source: &mut dyn FrameSource) -> BoothResult<TickEvent> {
        match self.state {
            SequencerState::CountingDown(0) => {
                self.state = SequencerState::Capturing;
                match self.capture_one(now, source) {
                    Ok(event) => Ok(event),
                    Err(err) => {
                        tracing::warn!(error = %err, "capture failed; sequence aborted");
                        self.state = SequencerState::Idle;
                        Err(err)
                    }
                }
            }
            SequencerState::CountingDown(n) => {
                self.state = SequencerState::CountingDown(n - 1);
                Ok(TickEvent::Countdown(n))
            }
            SequencerState::Idle | SequencerState::Done => Err(BoothError::sequence(
                "tick outside a running sequence (leaked timer?)",
            )),
            // Unreachable from outside: Capturing never survives a tick.
            SequencerState::Capturing => Err(BoothError::sequence("tick during capture")),
        }
    }

    fn capture_one(&mut self, now: Instant, source: &mut dyn FrameSource) -> BoothResult<TickEvent> {
        self.shutter.fire(now);

        let frame = source.grab()?;
        let slot = SlotIndex::new(self.shots.len())?;
        let shot = Snapshot::capture(slot, now, &frame)?;
        self.shots.push(shot);

        let sequence_done = self.shots.len() == PHOTO_COUNT;
        self.state = if sequence_done {
            SequencerState::Done
        } else {
            SequencerState::CountingDown(COUNTDOWN_START)
        };
        tracing::debug!(slot = %slot, sequence_done, "photo captured");

        Ok(TickEvent::Captured {
            slot,
            sequence_done,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/sequencer.rs"]
mod tests;
