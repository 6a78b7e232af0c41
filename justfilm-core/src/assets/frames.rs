use std::path::Path;

use anyhow::Context;

use crate::assets::decode::decode_photo;
use crate::foundation::error::{BoothError, BoothResult};

/// Decorative overlay stamped on top of the finished strip.
///
/// The set is fixed; each frame's asset lives at `images/<id>.png` under the
/// assets root. Selection is last-wins up to the moment a compose starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    /// First frame design; the default when nothing is selected.
    #[default]
    Frame1,
    /// Second frame design.
    Frame2,
    /// Third frame design.
    Frame3,
    /// Fourth frame design.
    Frame4,
}

impl FrameKind {
    /// All selectable frames, in picker order.
    pub const ALL: [FrameKind; 4] = [
        FrameKind::Frame1,
        FrameKind::Frame2,
        FrameKind::Frame3,
        FrameKind::Frame4,
    ];

    /// Stable identifier, as used in asset paths.
    pub fn id(self) -> &'static str {
        match self {
            FrameKind::Frame1 => "frame1",
            FrameKind::Frame2 => "frame2",
            FrameKind::Frame3 => "frame3",
            FrameKind::Frame4 => "frame4",
        }
    }

    /// Asset path relative to the assets root: `images/<id>.png`.
    pub fn asset_rel_path(self) -> String {
        format!("images/{}.png", self.id())
    }

    /// Accent color of the built-in overlay design for this frame.
    pub fn accent_rgba8(self) -> [u8; 4] {
        match self {
            FrameKind::Frame1 => [233, 196, 106, 255],
            FrameKind::Frame2 => [231, 111, 81, 255],
            FrameKind::Frame3 => [42, 157, 143, 255],
            FrameKind::Frame4 => [38, 70, 83, 255],
        }
    }
}

/// Render the built-in overlay design for `kind`: a strip-sized transparent
/// canvas with an accent-colored border and a divider band at each slot
/// boundary, leaving the photos visible.
pub fn render_builtin_overlay(kind: FrameKind) -> image::RgbaImage {
    use crate::foundation::geometry::{PHOTO_COUNT, PHOTO_HEIGHT, STRIP_HEIGHT, STRIP_WIDTH};

    const BORDER: u32 = 24;
    const DIVIDER: u32 = 8;

    let accent = image::Rgba(kind.accent_rgba8());
    let mut img = image::RgbaImage::new(STRIP_WIDTH, STRIP_HEIGHT);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let on_border = x < BORDER
            || x >= STRIP_WIDTH - BORDER
            || y < BORDER
            || y >= STRIP_HEIGHT - BORDER;
        let on_divider = (1..PHOTO_COUNT as u32).any(|slot| {
            let edge = slot * PHOTO_HEIGHT;
            y >= edge - DIVIDER / 2 && y < edge + DIVIDER / 2
        });
        if on_border || on_divider {
            *px = accent;
        }
    }
    img
}

/// Write the built-in overlay for every [`FrameKind`] under `assets_root`,
/// following the `images/<id>.png` convention. Returns the paths written.
pub fn write_builtin_overlays(assets_root: &Path) -> BoothResult<Vec<std::path::PathBuf>> {
    let dir = assets_root.join("images");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create assets dir '{}'", dir.display()))?;

    let mut written = Vec::with_capacity(FrameKind::ALL.len());
    for kind in FrameKind::ALL {
        let path = assets_root.join(kind.asset_rel_path());
        render_builtin_overlay(kind)
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write frame asset '{}'", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for FrameKind {
    type Err = BoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| BoothError::validation(format!("unknown frame '{s}'")))
    }
}

/// Read and decode the overlay asset for `kind` from under `assets_root`.
///
/// A missing or corrupt asset is an [`BoothError::Asset`]: the compose that asked
/// for it aborts and no file is produced.
pub fn load_frame_overlay(assets_root: &Path, kind: FrameKind) -> BoothResult<image::RgbaImage> {
    let path = assets_root.join(kind.asset_rel_path());
    let bytes = std::fs::read(&path)
        .with_context(|| format!("read frame asset '{}'", path.display()))
        .map_err(|e| BoothError::Asset(format!("{e:#}")))?;
    decode_photo(&bytes).map_err(|e| BoothError::Asset(format!("frame '{kind}': {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frames.rs"]
mod tests;
