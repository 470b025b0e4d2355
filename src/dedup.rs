//! Deduplication of extracted words
//!
//! Words are compared byte for byte, so `Apple` and `apple` stay distinct.
//! The set carries no ordering; it only feeds the sorter.

use ahash::RandomState;
use hashbrown::HashSet;

/// Statistics for deduplication operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    /// Total items processed
    pub total_processed: u64,
    /// Unique items found
    pub unique_count: u64,
    /// Duplicate items found
    pub duplicate_count: u64,
}

impl DedupStats {
    pub fn record_unique(&mut self) {
        self.total_processed += 1;
        self.unique_count += 1;
    }

    pub fn record_duplicate(&mut self) {
        self.total_processed += 1;
        self.duplicate_count += 1;
    }
}

/// Set of unique words produced by one filter pass
#[derive(Debug, Clone, Default)]
pub struct VocabularySet {
    set: HashSet<String, RandomState>,
    stats: DedupStats,
}

impl VocabularySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            stats: DedupStats::default(),
        }
    }

    /// Add a word, returning true if it was not seen before
    pub fn insert(&mut self, word: String) -> bool {
        let unique = self.set.insert(word);
        if unique {
            self.stats.record_unique();
        } else {
            self.stats.record_duplicate();
        }
        unique
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn stats(&self) -> DedupStats {
        self.stats
    }

    /// Release the unique words in unspecified order
    pub fn into_vec(self) -> Vec<String> {
        self.set.into_iter().collect()
    }
}

impl FromIterator<String> for VocabularySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        for word in iter {
            set.insert(word);
        }
        set
    }
}

/// Collapse a sequence of words into its distinct values
pub fn deduplicate(words: Vec<String>) -> VocabularySet {
    words.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_deduplicate() {
        let set = deduplicate(owned(&["test1", "test2", "test1"]));

        assert_eq!(set.len(), 2);
        assert!(set.contains("test1"));
        assert!(!set.contains("test3"));
        assert_eq!(set.stats(), DedupStats { total_processed: 3, unique_count: 2, duplicate_count: 1 });
    }

    #[test]
    fn test_case_sensitive() {
        let set = deduplicate(owned(&["Apple", "apple", "APPLE"]));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let set = deduplicate(Vec::new());

        assert!(set.is_empty());
        assert!(set.into_vec().is_empty());
    }

    #[test]
    fn test_output_is_subset_without_repeats() {
        let input = owned(&["b", "a", "c", "a", "b", "b", "d"]);
        let mut unique = deduplicate(input.clone()).into_vec();

        assert!(unique.len() <= input.len());
        assert!(unique.iter().all(|w| input.contains(w)));

        unique.sort();
        let before = unique.len();
        unique.dedup();
        assert_eq!(unique.len(), before);
        assert_eq!(unique, owned(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = VocabularySet::new();

        assert!(set.insert("cat".to_string()));
        assert!(!set.insert("cat".to_string()));
        assert_eq!(set.stats().duplicate_count, 1);
    }
}
