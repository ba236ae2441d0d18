use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    assets::resolve::FsAssetResolver,
    catalog::registry::Catalog,
    export::{
        encode::DEFAULT_JPEG_QUALITY,
        exporter::{EXPORT_FILE_NAME, ExportSettings},
    },
    foundation::core::{EXPORT_SIZE_PX, MAX_CANVAS_PX, Rgba8},
    foundation::error::{AvatarError, AvatarResult},
};

/// Runtime configuration, loaded from JSON. Every field is optional.
///
/// ```json
/// {
///   "assets_root": "public/assets",
///   "asset_ext": "png",
///   "canvas_size": 400,
///   "fill": "#1f2937",
///   "jpeg_quality": 90,
///   "file_name": "aztec-avatar.jpeg",
///   "catalog": { "hat": ["Crown"] }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvatarConfig {
    /// Directory holding `<category>/<option>.<ext>` layer files.
    pub assets_root: PathBuf,
    /// Layer file extension, without the dot.
    pub asset_ext: String,
    /// Export canvas side in pixels.
    pub canvas_size: u32,
    /// Opaque fill under every export.
    pub fill: Rgba8,
    /// JPEG quality, `1..=100`.
    pub jpeg_quality: u8,
    /// Suggested export file name.
    pub file_name: String,
    /// Inline catalog replacing the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            asset_ext: "png".to_owned(),
            canvas_size: EXPORT_SIZE_PX,
            fill: Rgba8::EXPORT_FILL,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            file_name: EXPORT_FILE_NAME.to_owned(),
            catalog: None,
        }
    }
}

impl AvatarConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> AvatarResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| AvatarError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// A relative `assets_root` is resolved against the config file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let mut cfg = Self::from_json_str(&json)?;
        if cfg.assets_root.is_relative()
            && let Some(dir) = path.parent()
        {
            cfg.assets_root = dir.join(&cfg.assets_root);
        }
        Ok(cfg)
    }

    /// Check ranges and shapes that serde cannot express.
    pub fn validate(&self) -> AvatarResult<()> {
        if self.canvas_size == 0 {
            return Err(AvatarError::config("canvas_size must be > 0"));
        }
        if self.canvas_size > MAX_CANVAS_PX {
            return Err(AvatarError::config(format!(
                "canvas_size must be <= {MAX_CANVAS_PX}"
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(AvatarError::config("jpeg_quality must be in 1..=100"));
        }
        if !self.fill.is_opaque() {
            return Err(AvatarError::config("fill must be opaque"));
        }
        if self.asset_ext.is_empty() || self.asset_ext.contains(['/', '\\', '.']) {
            return Err(AvatarError::config(
                "asset_ext must be a bare extension such as \"png\"",
            ));
        }
        if self.file_name.trim().is_empty()
            || self.file_name.contains(['/', '\\'])
            || self.file_name == "."
            || self.file_name == ".."
        {
            return Err(AvatarError::config("file_name must be a plain file name"));
        }
        Ok(())
    }

    /// Catalog to use: the inline one if present, otherwise the built-in set.
    pub fn catalog(&self) -> AvatarResult<Catalog> {
        match &self.catalog {
            Some(raw) => Catalog::from_raw(raw.clone()),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Filesystem resolver for the configured asset tree.
    pub fn resolver(&self) -> FsAssetResolver {
        FsAssetResolver::new(&self.assets_root, &self.asset_ext)
    }

    /// Export settings derived from this config.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            size: self.canvas_size,
            fill: self.fill,
            jpeg_quality: self.jpeg_quality,
            file_name: self.file_name.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
