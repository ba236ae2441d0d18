use crate::catalog::category::Category;

/// The current optional choice for every category.
///
/// A plain owned value: sessions mutate it in place and exporters take a snapshot by cloning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    slots: [Option<String>; 7],
}

impl Selection {
    /// A selection with every category set to none.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The option chosen for `category`, if any.
    pub fn get(&self, category: Category) -> Option<&str> {
        self.slots[category.paint_index()].as_deref()
    }

    /// Return `true` when no category has a value.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Ordered `(category, option)` pairs for the categories that have a value.
    ///
    /// This is the composite consumed by both preview and export.
    pub fn composite(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|o| (c, o)))
    }

    pub(crate) fn put(&mut self, category: Category, option: Option<String>) {
        self.slots[category.paint_index()] = option;
    }

    pub(crate) fn clear_all(&mut self) {
        self.slots = Default::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/selection.rs"]
mod tests;
