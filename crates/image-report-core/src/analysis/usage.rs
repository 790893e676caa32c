use super::catalog::AssetCatalog;
use super::classify::References;
use crate::error::Error;
use crate::scanner::ImageFile;
use std::collections::BTreeSet;
use std::fs;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Every token referenced anywhere, exactly as written.
pub fn used_names(references: &References) -> BTreeSet<&str> {
    references
        .values()
        .flatten()
        .map(|token| token.as_str())
        .collect()
}

/// On-disk names nobody references. A high-density image counts as used
/// when its base sibling is referenced by name.
pub fn find_unused(catalog: &AssetCatalog, references: &References) -> Vec<String> {
    let used = used_names(references);
    catalog
        .raw_names()
        .iter()
        .filter(|name| !used.contains(name.as_str()))
        .filter(|name| !used.contains(catalog.base_name(name)))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnusedAssets {
    pub names: Vec<String>,
    pub total_bytes: u64,
}

impl UnusedAssets {
    /// Attach on-disk sizes to `names`. Every file carrying an unused name
    /// counts toward the total.
    pub fn measure(names: Vec<String>, images: &[ImageFile]) -> Result<Self, Error> {
        let lookup: BTreeSet<&str> = names.iter().map(|n| n.as_str()).collect();
        let mut total_bytes = 0u64;
        for image in images.iter().filter(|i| lookup.contains(i.name.as_str())) {
            let metadata = fs::metadata(&image.path).map_err(|source| Error::Unreadable {
                path: image.path.clone(),
                source,
            })?;
            total_bytes += metadata.len();
        }
        Ok(Self { names, total_bytes })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn formatted_size(&self) -> String {
        format_bytes(self.total_bytes)
    }
}

/// Approximate size in binary units, truncated: `~2 KB`, `~0 B`.
pub fn format_bytes(bytes: u64) -> String {
    let index = if bytes == 0 {
        0
    } else {
        ((63 - bytes.leading_zeros()) / 10).min(UNITS.len() as u32 - 1)
    };
    format!("~{} {}", bytes >> (10 * index), UNITS[index as usize])
}
