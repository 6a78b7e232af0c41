use std::time::Duration;

use crate::foundation::error::{BoothError, BoothResult};

/// Width in pixels of one photo, and of the finished strip.
pub const PHOTO_WIDTH: u32 = 640;

/// Height in pixels of one photo.
pub const PHOTO_HEIGHT: u32 = 480;

/// Number of photos in a strip.
pub const PHOTO_COUNT: usize = 4;

/// Countdown value shown on the first tick of every capture cycle.
pub const COUNTDOWN_START: u8 = 3;

/// How long the shutter flash cue stays visible after a capture.
pub const SHUTTER_FLASH: Duration = Duration::from_millis(200);

/// Width in pixels of the composite strip.
pub const STRIP_WIDTH: u32 = PHOTO_WIDTH;

/// Height in pixels of the composite strip (four stacked photos).
pub const STRIP_HEIGHT: u32 = PHOTO_HEIGHT * PHOTO_COUNT as u32;

/// Vertical slot position of a photo within the strip, in `0..PHOTO_COUNT`.
///
/// Capture order, slot order, and final placement order are the same thing: the
/// sequencer assigns slots in capture order and the composer places each decoded
/// photo at its own slot offset, so placement stays deterministic no matter which
/// decode finishes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Build a slot index, rejecting values outside `0..PHOTO_COUNT`.
    pub fn new(index: usize) -> BoothResult<Self> {
        if index >= PHOTO_COUNT {
            return Err(BoothError::validation(format!(
                "slot index {index} out of range 0..{PHOTO_COUNT}"
            )));
        }
        Ok(Self(index))
    }

    /// Zero-based slot position.
    pub fn as_usize(self) -> usize {
        self.0
    }

    /// Vertical pixel offset of this slot within the strip.
    pub fn y_offset(self) -> u32 {
        self.0 as u32 * PHOTO_HEIGHT
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
