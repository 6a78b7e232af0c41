use super::*;

#[test]
fn strip_is_four_stacked_photos() {
    assert_eq!(STRIP_WIDTH, PHOTO_WIDTH);
    assert_eq!(STRIP_HEIGHT, PHOTO_HEIGHT * PHOTO_COUNT as u32);
    assert_eq!(STRIP_WIDTH, 640);
    assert_eq!(STRIP_HEIGHT, 1920);
}

#[test]
fn slot_index_bounds_and_offsets() {
    for i in 0..PHOTO_COUNT {
        let slot = SlotIndex::new(i).unwrap();
        assert_eq!(slot.as_usize(), i);
        assert_eq!(slot.y_offset(), i as u32 * PHOTO_HEIGHT);
    }
    assert!(SlotIndex::new(PHOTO_COUNT).is_err());
}

#[test]
fn slot_index_displays_bare_number() {
    assert_eq!(SlotIndex::new(2).unwrap().to_string(), "2");
}
