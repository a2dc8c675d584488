//! Per-category lookup over a catalog

use ahash::AHashMap;
use ms_core::Catalog;

/// Upcoming event counts keyed by exact category label
///
/// Built once per catalog; the home page badges specialty chips with the
/// number of upcoming events they would select.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    upcoming: AHashMap<String, usize>,
}

impl CategoryIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut upcoming = AHashMap::new();
        for event in catalog.iter().filter(|e| !e.is_archived) {
            *upcoming.entry(event.category.clone()).or_insert(0) += 1;
        }
        Self { upcoming }
    }

    /// Upcoming events labelled `category`
    pub fn upcoming_count(&self, category: &str) -> usize {
        self.upcoming.get(category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_catalog;

    #[test]
    fn test_counts_only_upcoming() {
        let index = CategoryIndex::build(&builtin_catalog().unwrap());

        assert_eq!(index.upcoming_count("Neurology"), 1);
        // Only archived events carry this label
        assert_eq!(index.upcoming_count("Cardiology"), 0);
    }

    #[test]
    fn test_category_match_is_exact() {
        let index = CategoryIndex::build(&builtin_catalog().unwrap());

        assert_eq!(index.upcoming_count("neurology"), 0);
        assert_eq!(index.upcoming_count("Neuro"), 0);
        assert_eq!(index.upcoming_count("Pediatrics"), 0);
    }
}
