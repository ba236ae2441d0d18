use std::{sync::Arc, thread::JoinHandle};

use image::RgbImage;

use crate::{
    assets::resolve::AssetResolver,
    compose::selection::Selection,
    export::{
        encode::{DEFAULT_JPEG_QUALITY, encode_jpeg},
        sink::OutputSink,
    },
    foundation::core::{EXPORT_SIZE_PX, Rgba8},
    foundation::error::{AvatarError, AvatarResult},
    render::{
        canvas::RasterCanvas,
        layers::{LayerOutcome, LayerStatus, paint_selection},
    },
};

/// Suggested file name for every export.
pub const EXPORT_FILE_NAME: &str = "aztec-avatar.jpeg";

/// Knobs for the export pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSettings {
    /// Square canvas side in pixels.
    pub size: u32,
    /// Opaque fill painted before any layer.
    pub fill: Rgba8,
    /// JPEG quality, `1..=100`.
    pub jpeg_quality: u8,
    /// Suggested output file name.
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            size: EXPORT_SIZE_PX,
            fill: Rgba8::EXPORT_FILL,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            file_name: EXPORT_FILE_NAME.to_owned(),
        }
    }
}

/// A finished export: encoded bytes plus what went into them.
#[derive(Clone, Debug)]
pub struct ExportedImage {
    /// Suggested file name.
    pub file_name: String,
    /// Encoded JPEG bytes.
    pub bytes: Vec<u8>,
    /// Flattened pixels that were encoded.
    pub pixels: RgbImage,
    /// Per-layer results in painter's order.
    pub layers: Vec<LayerOutcome>,
}

impl ExportedImage {
    /// Layers that were selected but left out, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (&LayerOutcome, &str)> + '_ {
        self.layers.iter().filter_map(|l| match &l.status {
            LayerStatus::Skipped(reason) => Some((l, reason.as_str())),
            LayerStatus::Drawn => None,
        })
    }
}

/// Flattens selections into JPEG files.
#[derive(Clone)]
pub struct Exporter {
    resolver: Arc<dyn AssetResolver>,
    settings: ExportSettings,
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Exporter {
    /// Exporter over `resolver` with explicit settings.
    pub fn new(resolver: Arc<dyn AssetResolver>, settings: ExportSettings) -> Self {
        Self { resolver, settings }
    }

    /// Exporter with the stock 400×400 / `#1f2937` / quality 90 settings.
    pub fn with_defaults(resolver: Arc<dyn AssetResolver>) -> Self {
        Self::new(resolver, ExportSettings::default())
    }

    /// Active settings.
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Flatten `selection` and encode it.
    ///
    /// Missing or undecodable layers are skipped and reported in [`ExportedImage::layers`].
    /// Allocation and encoding failures abort the export with no output.
    #[tracing::instrument(skip(self, selection), fields(size = self.settings.size))]
    pub fn export(&self, selection: &Selection) -> AvatarResult<ExportedImage> {
        if !self.settings.fill.is_opaque() {
            return Err(AvatarError::validation("export fill must be opaque"));
        }

        let mut canvas =
            RasterCanvas::filled(self.settings.size, self.settings.size, self.settings.fill)?;
        let layers = paint_selection(selection, self.resolver.as_ref(), &mut canvas);

        let pixels = canvas.to_rgb_image()?;
        let bytes = encode_jpeg(&pixels, self.settings.jpeg_quality)?;

        tracing::debug!(
            drawn = layers.iter().filter(|l| l.is_drawn()).count(),
            skipped = layers.iter().filter(|l| !l.is_drawn()).count(),
            bytes = bytes.len(),
            "export encoded"
        );

        Ok(ExportedImage {
            file_name: self.settings.file_name.clone(),
            bytes,
            pixels,
            layers,
        })
    }

    /// Export `selection` and offer the result to `sink`.
    pub fn deliver(
        &self,
        selection: &Selection,
        sink: &mut dyn OutputSink,
    ) -> AvatarResult<ExportedImage> {
        let exported = self.export(selection)?;
        sink.offer(&exported)?;
        Ok(exported)
    }

    /// Run [`Exporter::export`] on a background thread against `snapshot`.
    ///
    /// The caller keeps editing its session; the job only ever sees the snapshot it was given.
    pub fn spawn(&self, snapshot: Selection) -> ExportJob {
        let exporter = self.clone();
        let handle = std::thread::spawn(move || exporter.export(&snapshot));
        ExportJob { handle }
    }
}

/// Handle to an export running in the background.
#[derive(Debug)]
pub struct ExportJob {
    handle: JoinHandle<AvatarResult<ExportedImage>>,
}

impl ExportJob {
    /// Return `true` once the export has finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the export finishes.
    pub fn join(self) -> AvatarResult<ExportedImage> {
        self.handle
            .join()
            .map_err(|_| AvatarError::export("export thread panicked"))?
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/exporter.rs"]
mod tests;
