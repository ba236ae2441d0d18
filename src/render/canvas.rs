use image::{RgbImage, RgbaImage};

use crate::{
    assets::decode::{PreparedImage, unpremultiply_rgba8_in_place},
    foundation::core::{MAX_CANVAS_PX, Rgba8},
    foundation::error::{AvatarError, AvatarResult},
    render::composite::{over_in_place, scale_to_fill},
};

/// Offscreen premultiplied RGBA8 pixel buffer owned by a single render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterCanvas {
    /// Allocate a `width`×`height` canvas with every pixel set to `fill`.
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub fn filled(width: u32, height: u32, fill: Rgba8) -> AvatarResult<Self> {
        if width == 0 || height == 0 {
            return Err(AvatarError::export("canvas dimensions must be non-zero"));
        }
        if width > MAX_CANVAS_PX || height > MAX_CANVAS_PX {
            return Err(AvatarError::export(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_PX}px per side"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| AvatarError::export(format!("canvas {width}x{height} is too large")))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            AvatarError::export(format!("allocate {width}x{height} canvas: {e}"))
        })?;
        let px = fill.to_premul();
        for _ in 0..(len / 4) {
            data.extend_from_slice(&px);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Stretch `layer` over the whole canvas and composite it source-over.
    pub fn draw_layer(&mut self, layer: &PreparedImage) -> AvatarResult<()> {
        let scaled = scale_to_fill(layer, self.width, self.height)?;
        over_in_place(&mut self.data, &scaled)
    }

    /// Straight-alpha RGBA image of the current contents.
    pub fn to_rgba_image(&self) -> AvatarResult<RgbaImage> {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| AvatarError::export("canvas buffer size mismatch"))
    }

    /// RGB image of the current contents, dropping alpha.
    ///
    /// Only meaningful for canvases started from an opaque fill, where alpha stays 255.
    pub fn to_rgb_image(&self) -> AvatarResult<RgbImage> {
        let mut rgb = Vec::new();
        rgb.try_reserve_exact(self.data.len() / 4 * 3)
            .map_err(|e| AvatarError::export(format!("allocate rgb buffer: {e}")))?;
        for px in self.data.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
        }
        RgbImage::from_raw(self.width, self.height, rgb)
            .ok_or_else(|| AvatarError::export("canvas buffer size mismatch"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
