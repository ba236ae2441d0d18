use std::sync::Arc;

use rand::RngCore;

use crate::{
    catalog::{category::Category, registry::Catalog},
    compose::{randomize, selection::Selection},
    foundation::error::{AvatarError, AvatarResult},
};

/// One builder session: a catalog, the selection being edited, and a randomness source.
///
/// The session is the single mutator of its [`Selection`]; every operation either applies fully
/// or leaves the selection untouched.
pub struct Session {
    catalog: Arc<Catalog>,
    selection: Selection,
    rng: Box<dyn RngCore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start an empty session backed by the thread-local generator.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, rand::rng())
    }

    /// Start an empty session with an explicit generator (seeded tests, replays).
    pub fn with_rng(catalog: Arc<Catalog>, rng: impl RngCore + 'static) -> Self {
        Self {
            catalog,
            selection: Selection::empty(),
            rng: Box::new(rng),
        }
    }

    /// The catalog this session validates against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Borrow the live selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Owned copy of the selection, for handing to an export that outlives this borrow.
    pub fn snapshot(&self) -> Selection {
        self.selection.clone()
    }

    /// Replace the value for `category`; `None` clears it.
    ///
    /// Options outside the catalog are rejected and the selection is left as it was.
    pub fn set(&mut self, category: Category, option: Option<&str>) -> AvatarResult<()> {
        if let Some(opt) = option
            && !self.catalog.contains(category, opt)
        {
            return Err(AvatarError::validation(format!(
                "\"{opt}\" is not a {category} option"
            )));
        }
        tracing::debug!(%category, ?option, "set trait");
        self.selection.put(category, option.map(str::to_owned));
        Ok(())
    }

    /// Clear a single category.
    pub fn clear(&mut self, category: Category) {
        self.selection.put(category, None);
    }

    /// Clear every category.
    pub fn clear_all(&mut self) {
        self.selection.clear_all();
    }

    /// Re-roll the whole selection.
    pub fn randomize(&mut self) -> &Selection {
        self.selection = randomize::roll(&self.catalog, &mut *self.rng);
        tracing::debug!(layers = self.selection.composite().count(), "randomized");
        &self.selection
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/session.rs"]
mod tests;
