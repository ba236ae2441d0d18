/// Convenience result type used across the crate.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Invalid caller-provided data (unknown category, option outside the catalog, bad paths).
    #[error("validation error: {0}")]
    Validation(String),

    /// A single layer asset could not be resolved or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Canvas allocation or image encoding failed; no output was produced.
    #[error("export error: {0}")]
    Export(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build an [`AvatarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AvatarError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build an [`AvatarError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build an [`AvatarError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
