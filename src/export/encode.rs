use image::{ExtendedColorType, ImageEncoder, RgbImage, codecs::jpeg::JpegEncoder};

use crate::foundation::error::{AvatarError, AvatarResult};

/// Default JPEG quality on the encoder's 1..=100 scale (0.9 of full quality).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encode an RGB image as baseline JPEG.
///
/// Quality outside `1..=100` and encoder failures surface as [`AvatarError::Export`].
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> AvatarResult<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(AvatarError::export(format!(
            "jpeg quality must be in 1..=100, got {quality}"
        )));
    }

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| AvatarError::export(format!("encode jpeg: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/encode.rs"]
mod tests;
