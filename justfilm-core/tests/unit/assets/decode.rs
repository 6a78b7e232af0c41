use std::io::Cursor;

use super::*;

#[test]
fn decode_photo_png_roundtrips_dimensions_and_pixels() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_photo(&buf).unwrap();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(2, 1).0, [9, 8, 7, 255]);
}

#[test]
fn decode_photo_rejects_garbage() {
    assert!(decode_photo(b"not an image").is_err());
}
