use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use anyhow::Context;

use crate::{
    catalog::category::Category,
    foundation::error::{AvatarError, AvatarResult},
};

/// Immutable registry of valid options per category.
///
/// Option order is preserved as given; a category with no entry has an empty option list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    options: BTreeMap<Category, Vec<String>>,
}

impl Catalog {
    /// The stock trait set shipped with the builder.
    pub fn builtin() -> Self {
        const BUILTIN: [(Category, &[&str]); 7] = [
            (
                Category::Background,
                &["apocalypse", "aztec", "classic", "Lavender"],
            ),
            (
                Category::Base,
                &["Diamon", "Glyph", "Normal", "Robotb", "Tattoo"],
            ),
            (Category::Clothes, &["Hoodie", "Leather", "Poncho", "Vest"]),
            (Category::Eyes, &["Eyes1 copy", "eyes2 copy", "eyes3 copy"]),
            (Category::Mouth, &["Mouth1", "Mouth3", "Mouth4"]),
            (Category::Accessories, &["Devilhorn", "Gchain", "Halo"]),
            (Category::Hat, &["aztecclassic", "Aztecy", "Crown"]),
        ];

        let options = BUILTIN
            .into_iter()
            .map(|(c, opts)| (c, opts.iter().map(|s| (*s).to_owned()).collect()))
            .collect();
        Self { options }
    }

    /// Build a catalog from explicit `(category, options)` pairs.
    ///
    /// Rejects empty option identifiers and duplicates within a category. Later pairs for the same
    /// category replace earlier ones.
    pub fn from_entries<I, S>(entries: I) -> AvatarResult<Self>
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: Into<String>,
    {
        let mut options = BTreeMap::new();
        for (category, opts) in entries {
            let opts: Vec<String> = opts.into_iter().map(Into::into).collect();
            validate_options(category, &opts)?;
            options.insert(category, opts);
        }
        Ok(Self { options })
    }

    /// Parse a catalog from a JSON object of `{ "<category>": ["option", ...] }`.
    pub fn from_json_str(json: &str) -> AvatarResult<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| AvatarError::config(format!("parse catalog JSON: {e}")))?;
        Self::from_raw(raw)
    }

    /// Read and parse a catalog JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub(crate) fn from_raw(raw: BTreeMap<String, Vec<String>>) -> AvatarResult<Self> {
        let entries = raw
            .into_iter()
            .map(|(name, opts)| Ok((name.parse::<Category>()?, opts)))
            .collect::<AvatarResult<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Ordered options for `category`; empty when the category has none.
    pub fn options(&self, category: Category) -> &[String] {
        self.options
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Return `true` when `option` is a valid choice for `category`.
    pub fn contains(&self, category: Category, option: &str) -> bool {
        self.options(category).iter().any(|o| o == option)
    }

    /// Iterate every category in painter's order with its options (possibly empty).
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.options(c)))
    }
}

fn validate_options(category: Category, opts: &[String]) -> AvatarResult<()> {
    let mut seen = HashSet::with_capacity(opts.len());
    for opt in opts {
        if opt.trim().is_empty() {
            return Err(AvatarError::validation(format!(
                "{category}: option identifiers must be non-empty"
            )));
        }
        if !seen.insert(opt.as_str()) {
            return Err(AvatarError::validation(format!(
                "{category}: duplicate option \"{opt}\""
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/registry.rs"]
mod tests;
