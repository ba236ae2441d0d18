//! Composition engine: the selection value, its randomization policy, and the editing session.

pub(crate) mod randomize;
pub(crate) mod selection;
pub(crate) mod session;
