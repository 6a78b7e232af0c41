use anyhow::Context;

use crate::foundation::error::BoothResult;

/// Decode encoded image bytes into a straight-alpha RGBA8 buffer.
///
/// Used for both captured photos and frame overlay assets. Straight alpha is kept
/// because compositing goes through `image::imageops::overlay`, which blends
/// straight-alpha source-over.
pub fn decode_photo(bytes: &[u8]) -> BoothResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
