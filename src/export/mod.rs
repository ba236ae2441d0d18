//! Export pipeline: flatten a selection, encode it as JPEG, and hand it to an output sink.

pub(crate) mod encode;
pub(crate) mod exporter;
pub(crate) mod sink;
