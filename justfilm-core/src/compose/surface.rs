use crate::foundation::geometry::{PHOTO_HEIGHT, PHOTO_WIDTH, STRIP_HEIGHT, STRIP_WIDTH, SlotIndex};

/// Finished strip pixels: straight-alpha RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct StripImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Raw RGBA8 bytes.
    pub data: Vec<u8>,
}

/// Offscreen composite surface sized to hold one strip (fixed width, four photo
/// slots stacked vertically). Created fresh per compose and discarded after export.
#[derive(Debug)]
pub struct StripSurface {
    pixels: image::RgbaImage,
}

impl Default for StripSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl StripSurface {
    /// Allocate a transparent strip-sized surface.
    pub fn new() -> Self {
        Self {
            pixels: image::RgbaImage::new(STRIP_WIDTH, STRIP_HEIGHT),
        }
    }

    /// Draw a decoded photo into its slot: full width, vertical offset `slot * PHOTO_HEIGHT`.
    ///
    /// Photos that are not photo-sized are scaled to fill the slot. Each slot is
    /// reserved for exactly one photo, so draws commute: the finished surface is the
    /// same whichever order the decodes complete in.
    pub fn blit_photo(&mut self, slot: SlotIndex, photo: &image::RgbaImage) {
        let scaled;
        let photo = if photo.width() == PHOTO_WIDTH && photo.height() == PHOTO_HEIGHT {
            photo
        } else {
            scaled = image::imageops::resize(
                photo,
                PHOTO_WIDTH,
                PHOTO_HEIGHT,
                image::imageops::FilterType::Triangle,
            );
            &scaled
        };
        image::imageops::overlay(&mut self.pixels, photo, 0, i64::from(slot.y_offset()));
    }

    /// Alpha-composite `overlay` over the whole surface, stretched to cover it.
    pub fn overlay_stretched(&mut self, overlay: &image::RgbaImage) {
        let scaled;
        let overlay = if overlay.width() == STRIP_WIDTH && overlay.height() == STRIP_HEIGHT {
            overlay
        } else {
            scaled = image::imageops::resize(
                overlay,
                STRIP_WIDTH,
                STRIP_HEIGHT,
                image::imageops::FilterType::Triangle,
            );
            &scaled
        };
        image::imageops::overlay(&mut self.pixels, overlay, 0, 0);
    }

    /// Consume the surface into the finished strip pixels.
    pub fn finish(self) -> StripImage {
        let (width, height) = self.pixels.dimensions();
        StripImage {
            width,
            height,
            data: self.pixels.into_raw(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/surface.rs"]
mod tests;
