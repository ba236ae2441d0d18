//! Trait catalog: the fixed category order and the options valid in each category.

pub(crate) mod category;
pub(crate) mod label;
pub(crate) mod registry;
