use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_premul() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode_image(b"definitely not an image").is_err());
    assert!(decode_image(&[]).is_err());
}

#[test]
fn unpremultiply_restores_opaque_and_clears_transparent() {
    let mut px = vec![10, 20, 30, 255, 99, 99, 99, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255, 0, 0, 0, 0]);

    let mut half = vec![100, 50, 200, 128];
    premultiply_rgba8_in_place(&mut half);
    unpremultiply_rgba8_in_place(&mut half);
    for (got, want) in half.iter().zip([100u8, 50, 200, 128]) {
        assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
    }
}
