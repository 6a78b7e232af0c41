use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::compose::surface::StripImage;
use crate::foundation::error::BoothResult;

/// Fixed file name of every exported strip.
pub const STRIP_FILE_NAME: &str = "JustFilm.png";

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> BoothResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    Ok(())
}

/// Encode `strip` as a lossless PNG named [`STRIP_FILE_NAME`] inside `out_dir`.
///
/// Returns the path written.
pub fn write_strip_png(strip: &StripImage, out_dir: &Path) -> BoothResult<PathBuf> {
    let out = out_dir.join(STRIP_FILE_NAME);
    ensure_parent_dir(&out)?;
    image::save_buffer_with_format(
        &out,
        &strip.data,
        strip.width,
        strip.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
