use image::{RgbaImage, imageops::FilterType};

use crate::{
    assets::decode::PreparedImage,
    foundation::error::{AvatarError, AvatarResult},
};

pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> AvatarResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AvatarError::export(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Stretch a prepared layer to exactly `width`×`height`, ignoring aspect ratio.
///
/// Resampling runs on premultiplied bytes so transparent edges do not bleed color.
pub fn scale_to_fill(img: &PreparedImage, width: u32, height: u32) -> AvatarResult<Vec<u8>> {
    if img.width == width && img.height == height {
        return Ok(img.rgba8_premul.as_ref().clone());
    }
    let src = RgbaImage::from_raw(img.width, img.height, img.rgba8_premul.as_ref().clone())
        .ok_or_else(|| {
            AvatarError::asset(format!(
                "layer buffer does not match {}x{}",
                img.width, img.height
            ))
        })?;
    Ok(image::imageops::resize(&src, width, height, FilterType::Triangle).into_raw())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
