use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::AvatarError;

/// One of the seven avatar layer slots.
///
/// Declaration order is the compositing order: earlier categories are painted first and may be
/// occluded by later ones. `Ord` follows that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Scene behind the figure.
    Background,
    /// Body of the figure.
    Base,
    /// Garment layer.
    Clothes,
    /// Eyes.
    Eyes,
    /// Mouth.
    Mouth,
    /// Jewelry, horns, halos.
    Accessories,
    /// Headwear, painted last.
    Hat,
}

impl Category {
    /// Every category in painter's order.
    pub const ALL: [Category; 7] = [
        Category::Background,
        Category::Base,
        Category::Clothes,
        Category::Eyes,
        Category::Mouth,
        Category::Accessories,
        Category::Hat,
    ];

    /// Stable lowercase name used in asset paths, config files and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Background => "background",
            Category::Base => "base",
            Category::Clothes => "clothes",
            Category::Eyes => "eyes",
            Category::Mouth => "mouth",
            Category::Accessories => "accessories",
            Category::Hat => "hat",
        }
    }

    /// Position in painter's order (0 = painted first).
    pub fn paint_index(self) -> usize {
        self as usize
    }

    /// Categories that randomization never leaves empty.
    pub fn is_always_populated(self) -> bool {
        matches!(self, Category::Background | Category::Base)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AvatarError::validation(format!("unknown category \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/category.rs"]
mod tests;
