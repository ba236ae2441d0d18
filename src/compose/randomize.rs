use rand::Rng;

use crate::{catalog::registry::Catalog, compose::selection::Selection};

/// Chance that an optional category receives a value on each roll.
pub const POPULATE_PROBABILITY: f64 = 0.7;

/// Roll a fresh selection from `catalog`.
///
/// `background` and `base` always receive a uniformly random option. Every other category is
/// populated with probability [`POPULATE_PROBABILITY`], independently, and then receives a
/// uniformly random option. Categories with no options stay empty.
pub fn roll<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Selection {
    let mut out = Selection::empty();
    for (category, options) in catalog.iter() {
        if options.is_empty() {
            continue;
        }
        if !category.is_always_populated() && !coin(rng) {
            continue;
        }
        let idx = pick_index(rng.random::<f64>(), options.len());
        out.put(category, Some(options[idx].clone()));
    }
    out
}

fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random::<f64>() > 1.0 - POPULATE_PROBABILITY
}

/// Map `r` in `[0, 1)` to an index in `0..len` as `floor(r * len)`.
pub(crate) fn pick_index(r: f64, len: usize) -> usize {
    debug_assert!(len > 0);
    ((r * len as f64).floor() as usize).min(len - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/randomize.rs"]
mod tests;
