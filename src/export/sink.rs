use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{export::exporter::ExportedImage, foundation::error::AvatarResult};

/// Destination for finished exports: a save dialog, a download, a directory.
pub trait OutputSink {
    /// Offer one finished artifact under its suggested file name.
    fn offer(&mut self, artifact: &ExportedImage) -> AvatarResult<()>;
}

/// Sink that writes `<dir>/<file_name>`, replacing any previous export.
///
/// The file is staged beside its target and renamed into place.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Sink writing into `dir` (created on first use).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl OutputSink for DirectorySink {
    fn offer(&mut self, artifact: &ExportedImage) -> AvatarResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;

        let target = self.dir.join(&artifact.file_name);
        let staging = self.dir.join(format!(".{}.partial", artifact.file_name));
        let staged = std::fs::write(&staging, &artifact.bytes)
            .with_context(|| format!("write '{}'", staging.display()))
            .and_then(|()| {
                std::fs::rename(&staging, &target)
                    .with_context(|| format!("move export into '{}'", target.display()))
            });
        if let Err(err) = staged {
            let _ = std::fs::remove_file(&staging);
            return Err(err.into());
        }

        tracing::info!(path = %target.display(), bytes = artifact.bytes.len(), "saved avatar");
        self.written.push(target);
        Ok(())
    }
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    artifacts: Vec<ExportedImage>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured artifacts.
    pub fn artifacts(&self) -> &[ExportedImage] {
        &self.artifacts
    }
}

impl OutputSink for InMemorySink {
    fn offer(&mut self, artifact: &ExportedImage) -> AvatarResult<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
