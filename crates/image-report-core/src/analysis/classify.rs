use super::catalog::{AssetCatalog, Availability, Resolution};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Source file name → image tokens referenced in it, in file order.
pub type References = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Referenced but no suitable file exists.
    Missing,
    /// Only the base variant exists; high-density screens stretch it.
    WillUpscale,
    /// Only the high-density variant exists, or it is referenced explicitly.
    WillDownscale,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Missing,
        Category::WillUpscale,
        Category::WillDownscale,
    ];
}

/// Decide which category a single token falls in. `None` means the
/// reference is fully satisfied.
pub fn classify_token(catalog: &AssetCatalog, token: &str) -> Option<Category> {
    let resolution = catalog.resolution(token);
    match catalog.availability(catalog.base_name(token)) {
        Some(Availability::BaseOnly) => match resolution {
            Resolution::Base => Some(Category::WillUpscale),
            Resolution::HighDensity => Some(Category::Missing),
        },
        Some(Availability::HighDensityOnly) => Some(Category::WillDownscale),
        // An explicit high-density reference bypasses automatic variant selection.
        Some(Availability::Both) => match resolution {
            Resolution::HighDensity => Some(Category::WillDownscale),
            Resolution::Base => None,
        },
        None => Some(Category::Missing),
    }
}

/// Problematic references grouped by category, then by source file.
/// Files with nothing to report in a category are absent from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    missing: BTreeMap<String, Vec<String>>,
    will_upscale: BTreeMap<String, Vec<String>>,
    will_downscale: BTreeMap<String, Vec<String>>,
}

impl Classification {
    pub fn get(&self, category: Category) -> &BTreeMap<String, Vec<String>> {
        match category {
            Category::Missing => &self.missing,
            Category::WillUpscale => &self.will_upscale,
            Category::WillDownscale => &self.will_downscale,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut BTreeMap<String, Vec<String>> {
        match category {
            Category::Missing => &mut self.missing,
            Category::WillUpscale => &mut self.will_upscale,
            Category::WillDownscale => &mut self.will_downscale,
        }
    }

    pub fn missing(&self) -> &BTreeMap<String, Vec<String>> {
        &self.missing
    }

    pub fn will_upscale(&self) -> &BTreeMap<String, Vec<String>> {
        &self.will_upscale
    }

    pub fn will_downscale(&self) -> &BTreeMap<String, Vec<String>> {
        &self.will_downscale
    }

    /// Number of distinct tokens in a category across all files.
    pub fn count_images(&self, category: Category) -> usize {
        self.get(category)
            .values()
            .flatten()
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.will_upscale.is_empty() && self.will_downscale.is_empty()
    }
}

/// Classify every reference of every file against the catalog.
/// Repeated tokens within a file are considered once.
pub fn classify(catalog: &AssetCatalog, references: &References) -> Classification {
    let mut result = Classification::default();

    for (file, tokens) in references {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in tokens {
            if !seen.insert(token.as_str()) {
                continue;
            }
            if let Some(category) = classify_token(catalog, token) {
                result
                    .get_mut(category)
                    .entry(file.clone())
                    .or_default()
                    .push(token.clone());
            }
        }
    }

    result
}
