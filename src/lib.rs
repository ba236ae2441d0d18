//! Layered avatar composition.
//!
//! An avatar is a stack of seven trait layers painted in a fixed order
//! (`background`, `base`, `clothes`, `eyes`, `mouth`, `accessories`, `hat`). This crate owns the
//! part of an avatar builder that has real behavior:
//!
//! 1. **Catalog**: which options exist per [`Category`] ([`Catalog`]).
//! 2. **Compose**: an editing [`Session`] over a [`Selection`] with `set`, `clear_all` and
//!    `randomize`.
//! 3. **Render**: resolve each selected option through an [`AssetResolver`] and composite the
//!    layers source-over, either as a live preview ([`render_preview`]) or onto the 400×400 export
//!    canvas.
//! 4. **Export**: encode the flattened canvas as JPEG ([`Exporter`]) and offer it to an
//!    [`OutputSink`].
//!
//! A layer whose asset cannot be loaded is skipped and logged; it never fails the render.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod catalog;
mod compose;
mod config;
mod export;
mod foundation;
mod render;

pub use assets::decode::{PreparedImage, decode_image};
pub use assets::resolve::{
    AssetKey, AssetResolver, FsAssetResolver, MemoryAssetResolver, normalize_rel_path,
};
pub use catalog::category::Category;
pub use catalog::label::option_label;
pub use catalog::registry::Catalog;
pub use compose::randomize::{POPULATE_PROBABILITY, roll};
pub use compose::selection::Selection;
pub use compose::session::Session;
pub use config::AvatarConfig;
pub use export::encode::{DEFAULT_JPEG_QUALITY, encode_jpeg};
pub use export::exporter::{EXPORT_FILE_NAME, ExportJob, ExportSettings, ExportedImage, Exporter};
pub use export::sink::{DirectorySink, InMemorySink, OutputSink};
pub use foundation::core::{EXPORT_SIZE_PX, MAX_CANVAS_PX, Rgba8};
pub use foundation::error::{AvatarError, AvatarResult};
pub use render::canvas::RasterCanvas;
pub use render::layers::{LayerOutcome, LayerStatus, paint_selection};
pub use render::preview::{EMPTY_PREVIEW_PROMPT, PreviewFrame, PreviewLayer, render_preview};
