use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use super::*;

use crate::capture::source::SourceFrame;
use crate::foundation::geometry::{PHOTO_HEIGHT, PHOTO_WIDTH, STRIP_HEIGHT, STRIP_WIDTH};

const COLORS: [[u8; 4]; 4] = [
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
];

fn solid_snapshot(slot: usize, color: [u8; 4]) -> Snapshot {
    let mut rgba8 = Vec::with_capacity(PHOTO_WIDTH as usize * PHOTO_HEIGHT as usize * 4);
    for _ in 0..PHOTO_WIDTH as usize * PHOTO_HEIGHT as usize {
        rgba8.extend_from_slice(&color);
    }
    let frame = SourceFrame::new(PHOTO_WIDTH, PHOTO_HEIGHT, rgba8).unwrap();
    Snapshot::capture(SlotIndex::new(slot).unwrap(), Instant::now(), &frame).unwrap()
}

fn four_snapshots() -> Vec<Snapshot> {
    (0..PHOTO_COUNT)
        .map(|i| solid_snapshot(i, COLORS[i]))
        .collect()
}

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Assets root under target/ with a frame asset whose top-left quarter is opaque
/// white and the rest fully transparent.
fn assets_root(name: &str, kind: FrameKind) -> PathBuf {
    let root = PathBuf::from("target").join(name);
    std::fs::create_dir_all(root.join("images")).unwrap();

    let mut overlay = image::RgbaImage::new(8, 8);
    for (x, y, px) in overlay.enumerate_pixels_mut() {
        *px = if x < 4 && y < 4 {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        };
    }
    std::fs::write(root.join(kind.asset_rel_path()), png_bytes(overlay)).unwrap();
    root
}

fn pixel(strip: &StripImage, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * strip.width + x) * 4) as usize;
    [
        strip.data[i],
        strip.data[i + 1],
        strip.data[i + 2],
        strip.data[i + 3],
    ]
}

#[test]
fn bands_match_their_snapshots_and_the_overlay_stamps_last() {
    let root = assets_root("unit_strip_compose", FrameKind::Frame1);
    let strip = compose_strip(&four_snapshots(), FrameKind::Frame1, &root).unwrap();

    assert_eq!((strip.width, strip.height), (STRIP_WIDTH, STRIP_HEIGHT));

    // Sample where the stretched overlay is transparent (right edge).
    for (i, color) in COLORS.iter().enumerate() {
        let y = i as u32 * PHOTO_HEIGHT + PHOTO_HEIGHT / 2;
        assert_eq!(pixel(&strip, STRIP_WIDTH - 10, y), *color, "band {i}");
    }

    // Top-left quarter of the stretched overlay is opaque white, over band 0.
    assert_eq!(pixel(&strip, 10, 10), [255, 255, 255, 255]);
}

#[test]
fn incomplete_snapshot_lists_are_rejected() {
    let root = assets_root("unit_strip_incomplete", FrameKind::Frame1);

    let err = compose_strip(&[], FrameKind::Frame1, &root).unwrap_err();
    assert!(matches!(err, BoothError::Validation(_)));

    let three: Vec<Snapshot> = four_snapshots().into_iter().take(3).collect();
    let err = compose_strip(&three, FrameKind::Frame1, &root).unwrap_err();
    assert!(matches!(err, BoothError::Validation(_)));
}

#[test]
fn out_of_order_slots_are_rejected() {
    let root = assets_root("unit_strip_order", FrameKind::Frame1);
    let mut shots = four_snapshots();
    shots.swap(1, 2);
    assert!(matches!(
        compose_strip(&shots, FrameKind::Frame1, &root),
        Err(BoothError::Validation(_))
    ));
}

#[test]
fn corrupt_photo_aborts_the_whole_compose() {
    let root = assets_root("unit_strip_corrupt", FrameKind::Frame1);
    let mut shots = four_snapshots();
    shots[2] = Snapshot::from_encoded(SlotIndex::new(2).unwrap(), b"garbage".to_vec());

    assert!(matches!(
        compose_strip(&shots, FrameKind::Frame1, &root),
        Err(BoothError::Capture(_))
    ));
}

#[test]
fn missing_frame_asset_aborts_after_the_photos() {
    let root = assets_root("unit_strip_missing_frame", FrameKind::Frame1);
    // frame2 was never written; only frame1 exists under this root.
    assert!(matches!(
        compose_strip(&four_snapshots(), FrameKind::Frame2, &root),
        Err(BoothError::Asset(_))
    ));
}
