//! Layer asset resolution and decoding.

pub(crate) mod decode;
pub(crate) mod resolve;
