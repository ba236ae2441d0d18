use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    catalog::category::Category,
    foundation::error::{AvatarError, AvatarResult},
};

/// Identity of one layer asset: the `(category, option)` pair it is addressed by.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetKey {
    /// Layer slot.
    pub category: Category,
    /// Option identifier within the slot.
    pub option: String,
}

impl AssetKey {
    /// Build a key.
    pub fn new(category: Category, option: impl Into<String>) -> Self {
        Self {
            category,
            option: option.into(),
        }
    }

    /// Conventional relative address `<category>/<option>.<ext>`, normalized.
    pub fn rel_path(&self, ext: &str) -> AvatarResult<String> {
        normalize_rel_path(&format!("{}/{}.{ext}", self.category, self.option))
    }
}

/// Read-only store that turns an [`AssetKey`] into decoded pixels.
///
/// Implementations report failure through the result; callers decide whether a failure is fatal.
pub trait AssetResolver: Send + Sync {
    /// Fetch and decode the image for `key`.
    fn load(&self, key: &AssetKey) -> AvatarResult<PreparedImage>;
}

/// Resolver reading `<root>/<category>/<option>.<ext>` from the filesystem.
#[derive(Clone, Debug)]
pub struct FsAssetResolver {
    root: PathBuf,
    ext: String,
}

impl FsAssetResolver {
    /// Resolver rooted at `root` for files with extension `ext` (without the dot).
    pub fn new(root: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ext: ext.into(),
        }
    }

    /// Filesystem root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path the resolver reads for `key`.
    pub fn path_for(&self, key: &AssetKey) -> AvatarResult<PathBuf> {
        Ok(self.root.join(key.rel_path(&self.ext)?))
    }
}

impl AssetResolver for FsAssetResolver {
    fn load(&self, key: &AssetKey) -> AvatarResult<PreparedImage> {
        let path = self.path_for(key)?;
        let bytes =
            std::fs::read(&path).with_context(|| format!("read asset '{}'", path.display()))?;
        decode_image(&bytes)
            .map_err(|e| AvatarError::asset(format!("decode '{}': {e}", path.display())))
    }
}

/// In-memory resolver over pre-registered encoded images.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetResolver {
    encoded: HashMap<AssetKey, Arc<Vec<u8>>>,
}

impl MemoryAssetResolver {
    /// Empty resolver; every lookup fails until assets are inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register encoded image bytes for `(category, option)`, replacing any previous entry.
    pub fn insert(&mut self, category: Category, option: impl Into<String>, bytes: Vec<u8>) {
        self.encoded
            .insert(AssetKey::new(category, option), Arc::new(bytes));
    }

    /// Builder-style [`MemoryAssetResolver::insert`].
    pub fn with(mut self, category: Category, option: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(category, option, bytes);
        self
    }
}

impl AssetResolver for MemoryAssetResolver {
    fn load(&self, key: &AssetKey) -> AvatarResult<PreparedImage> {
        let bytes = self.encoded.get(key).ok_or_else(|| {
            AvatarError::asset(format!("no asset registered for {}/{}", key.category, key.option))
        })?;
        decode_image(bytes)
    }
}

/// Normalize and validate a relative asset path.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> AvatarResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(AvatarError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(AvatarError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(AvatarError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(AvatarError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolve.rs"]
mod tests;
