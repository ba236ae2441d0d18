use super::*;

#[test]
fn encodes_decodable_jpeg_with_same_dimensions() {
    let img = RgbImage::from_pixel(40, 30, image::Rgb([0x1f, 0x29, 0x37]));
    let bytes = encode_jpeg(&img, DEFAULT_JPEG_QUALITY).unwrap();

    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (40, 30));
    let px = decoded.get_pixel(20, 15).0;
    for (got, want) in px.iter().zip([0x1f, 0x29, 0x37]) {
        assert!(got.abs_diff(want) <= 3, "{px:?}");
    }
}

#[test]
fn encoding_is_repeatable() {
    let img = RgbImage::from_fn(16, 16, |x, y| image::Rgb([(x * 16) as u8, (y * 16) as u8, 77]));
    assert_eq!(encode_jpeg(&img, 90).unwrap(), encode_jpeg(&img, 90).unwrap());
}

#[test]
fn rejects_out_of_range_quality() {
    let img = RgbImage::new(1, 1);
    assert!(matches!(encode_jpeg(&img, 0), Err(AvatarError::Export(_))));
    assert!(encode_jpeg(&img, 101).is_err());
    assert!(encode_jpeg(&img, 100).is_ok());
}
