//! Rasterization: the offscreen canvas, source-over compositing, and the shared layer painter
//! used by both preview and export.

pub(crate) mod canvas;
pub(crate) mod composite;
pub(crate) mod layers;
pub(crate) mod preview;
