use std::path::Path;

use rayon::prelude::*;

use crate::assets::decode::decode_photo;
use crate::assets::frames::{FrameKind, load_frame_overlay};
use crate::capture::snapshot::Snapshot;
use crate::compose::surface::{StripImage, StripSurface};
use crate::foundation::error::{BoothError, BoothResult};
use crate::foundation::geometry::{PHOTO_COUNT, SlotIndex};

/// Compose the photo strip: four stacked photos with the selected frame stamped on top.
///
/// `snapshots` must hold exactly four photos in slot order. All four are decoded
/// concurrently; the `collect` over `Result`s is the join barrier, so the overlay
/// step cannot run until every decode has completed, and any decode failure aborts
/// the whole compose. Each photo is drawn into its own reserved slot, so the result
/// does not depend on decode completion order. The overlay asset is only loaded
/// once the photos are down; a missing or corrupt overlay also aborts, so a partial
/// strip is never returned.
#[tracing::instrument(skip(snapshots), fields(shots = snapshots.len(), frame = %frame))]
pub fn compose_strip(
    snapshots: &[Snapshot],
    frame: FrameKind,
    assets_root: &Path,
) -> BoothResult<StripImage> {
    if snapshots.len() != PHOTO_COUNT {
        return Err(BoothError::validation(format!(
            "strip needs exactly {PHOTO_COUNT} photos, got {}",
            snapshots.len()
        )));
    }
    for (i, shot) in snapshots.iter().enumerate() {
        if shot.slot() != SlotIndex::new(i)? {
            return Err(BoothError::validation(format!(
                "snapshot at position {i} carries slot {}",
                shot.slot()
            )));
        }
    }

    let decoded = snapshots
        .par_iter()
        .map(|shot| {
            decode_photo(shot.png_bytes())
                .map(|img| (shot.slot(), img))
                .map_err(|e| BoothError::capture(format!("photo {}: {e}", shot.slot())))
        })
        .collect::<BoothResult<Vec<_>>>()?;

    let mut surface = StripSurface::new();
    for (slot, photo) in &decoded {
        surface.blit_photo(*slot, photo);
    }

    let overlay = load_frame_overlay(assets_root, frame)?;
    surface.overlay_stretched(&overlay);

    tracing::debug!(%frame, "strip composed");
    Ok(surface.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/strip.rs"]
mod tests;
