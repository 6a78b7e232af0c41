use std::io::Cursor;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use crate::capture::source::SourceFrame;
use crate::foundation::error::{BoothError, BoothResult};
use crate::foundation::geometry::{PHOTO_HEIGHT, PHOTO_WIDTH, SlotIndex};

/// One captured photo: a source frame rasterized to the fixed photo size and
/// PNG-encoded at capture time. Immutable once created; carries the slot it
/// occupies and the instant it was taken.
#[derive(Clone, Debug)]
pub struct Snapshot {
    slot: SlotIndex,
    captured_at: Instant,
    png: Arc<Vec<u8>>,
}

/// Serializable snapshot facts for session reports.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SnapshotMeta {
    /// Slot the photo occupies in the strip.
    pub slot: SlotIndex,
    /// Encoded PNG size in bytes.
    pub png_bytes: usize,
}

impl Snapshot {
    /// Rasterize `frame` into the fixed photo size and encode it as PNG.
    ///
    /// Frames that are not already photo-sized are scaled to fit, matching how the
    /// live preview is drawn onto the fixed capture canvas.
    pub fn capture(slot: SlotIndex, now: Instant, frame: &SourceFrame) -> BoothResult<Self> {
        let (width, height) = (frame.width(), frame.height());
        let raw = image::RgbaImage::from_raw(width, height, frame.rgba8().to_vec())
            .ok_or_else(|| BoothError::capture("source frame bytes do not form an image"))?;

        let photo = if width == PHOTO_WIDTH && height == PHOTO_HEIGHT {
            raw
        } else {
            image::imageops::resize(
                &raw,
                PHOTO_WIDTH,
                PHOTO_HEIGHT,
                image::imageops::FilterType::Triangle,
            )
        };

        let mut png = Vec::new();
        photo
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .context("encode captured photo as png")?;

        Ok(Self {
            slot,
            captured_at: now,
            png: Arc::new(png),
        })
    }

    /// Wrap already-encoded photo bytes, e.g. a photo file picked up from disk.
    ///
    /// The bytes are not decoded here; a corrupt photo surfaces when the composer
    /// decodes it, and aborts the whole compose. The capture time of a wrapped
    /// photo is the instant it entered the session.
    pub fn from_encoded(slot: SlotIndex, bytes: Vec<u8>) -> Self {
        Self {
            slot,
            captured_at: Instant::now(),
            png: Arc::new(bytes),
        }
    }

    /// Slot the photo occupies in the strip.
    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    /// Instant the photo was taken.
    pub fn captured_at(&self) -> Instant {
        self.captured_at
    }

    /// Encoded PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Serializable facts about this snapshot.
    pub fn meta(&self) -> SnapshotMeta {
        SnapshotMeta {
            slot: self.slot,
            png_bytes: self.png.len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/snapshot.rs"]
mod tests;
