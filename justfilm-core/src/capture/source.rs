use crate::foundation::error::{BoothError, BoothResult};
use crate::foundation::geometry::{PHOTO_HEIGHT, PHOTO_WIDTH};

/// One raw RGBA8 frame delivered by a [`FrameSource`].
#[derive(Clone, Debug)]
pub struct SourceFrame {
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
}

impl SourceFrame {
    /// Build a frame from raw straight-alpha RGBA8 bytes in row-major order.
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> BoothResult<Self> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 {
            return Err(BoothError::validation("frame dimensions must be non-zero"));
        }
        if rgba8.len() != expected {
            return Err(BoothError::validation(format!(
                "frame byte length {} does not match {width}x{height} RGBA8 ({expected})",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    pub fn rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// Consume the frame, returning the raw bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.rgba8
    }
}

/// Seam for the live camera feed.
///
/// Acquiring the actual camera stream is a single permission-gated call that lives
/// outside the engine; implementations surface a failed or denied device as a
/// [`BoothError::Capture`]. There is no retry loop inside the engine: a failed grab
/// is terminal for the current attempt and the user retries via reset/start.
pub trait FrameSource {
    /// Grab the current live frame.
    fn grab(&mut self) -> BoothResult<SourceFrame>;
}

/// Deterministic synthetic source used in place of a camera.
///
/// Every grab produces a photo-sized frame with a distinct flat color so that
/// strip slots are tellable apart in output and in tests.
#[derive(Clone, Debug, Default)]
pub struct TestPatternSource {
    grabs: u32,
}

impl TestPatternSource {
    /// Build a fresh test-pattern source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat RGBA color of the `n`-th grab (0-based).
    pub fn color_for_grab(n: u32) -> [u8; 4] {
        [
            (40 + n.wrapping_mul(53) % 200) as u8,
            (60 + n.wrapping_mul(97) % 180) as u8,
            (80 + n.wrapping_mul(31) % 160) as u8,
            255,
        ]
    }
}

impl FrameSource for TestPatternSource {
    fn grab(&mut self) -> BoothResult<SourceFrame> {
        let color = Self::color_for_grab(self.grabs);
        self.grabs += 1;

        let mut rgba8 = Vec::with_capacity(PHOTO_WIDTH as usize * PHOTO_HEIGHT as usize * 4);
        for _ in 0..PHOTO_WIDTH as usize * PHOTO_HEIGHT as usize {
            rgba8.extend_from_slice(&color);
        }
        SourceFrame::new(PHOTO_WIDTH, PHOTO_HEIGHT, rgba8)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/source.rs"]
mod tests;
