use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Base,
    HighDensity,
}

/// Which resolution variants exist on disk for a base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    BaseOnly,
    HighDensityOnly,
    Both,
}

/// On-disk images partitioned by resolution variant.
///
/// Every distinct base name lands in exactly one of `base_only`,
/// `high_density_only` and `both`.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    suffix: String,
    base_only: BTreeSet<String>,
    high_density_only: BTreeSet<String>,
    both: BTreeSet<String>,
    raw_names: BTreeSet<String>,
}

impl AssetCatalog {
    /// Build the catalog from raw image names (extension already stripped).
    /// Duplicate names collapse.
    pub fn build<I, S>(names: I, suffix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw_names: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        let mut base: BTreeSet<&str> = BTreeSet::new();
        let mut high_density: BTreeSet<&str> = BTreeSet::new();
        for name in &raw_names {
            match strip_suffix(name, suffix) {
                Some(stripped) => high_density.insert(stripped),
                None => base.insert(name.as_str()),
            };
        }

        let high_density_only: BTreeSet<String> = high_density
            .difference(&base)
            .map(|s| s.to_string())
            .collect();
        let base_only: BTreeSet<String> = base
            .difference(&high_density)
            .map(|s| s.to_string())
            .collect();
        let both: BTreeSet<String> = base
            .union(&high_density)
            .filter(|name| !high_density_only.contains(**name) && !base_only.contains(**name))
            .map(|s| s.to_string())
            .collect();

        Self {
            suffix: suffix.to_string(),
            base_only,
            high_density_only,
            both,
            raw_names,
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn resolution(&self, name: &str) -> Resolution {
        match strip_suffix(name, &self.suffix) {
            Some(_) => Resolution::HighDensity,
            None => Resolution::Base,
        }
    }

    /// `name` with the high-density suffix removed, if it carries one.
    pub fn base_name<'a>(&self, name: &'a str) -> &'a str {
        strip_suffix(name, &self.suffix).unwrap_or(name)
    }

    pub fn availability(&self, base_name: &str) -> Option<Availability> {
        if self.base_only.contains(base_name) {
            Some(Availability::BaseOnly)
        } else if self.high_density_only.contains(base_name) {
            Some(Availability::HighDensityOnly)
        } else if self.both.contains(base_name) {
            Some(Availability::Both)
        } else {
            None
        }
    }

    pub fn base_only(&self) -> &BTreeSet<String> {
        &self.base_only
    }

    pub fn high_density_only(&self) -> &BTreeSet<String> {
        &self.high_density_only
    }

    pub fn both(&self) -> &BTreeSet<String> {
        &self.both
    }

    /// Every distinct on-disk name, suffix intact, sorted.
    pub fn raw_names(&self) -> &BTreeSet<String> {
        &self.raw_names
    }
}

fn strip_suffix<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    if suffix.is_empty() {
        return None;
    }
    name.strip_suffix(suffix)
}
