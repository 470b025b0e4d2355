//! Deterministic vocabulary ordering
//!
//! Words are ordered case-insensitively, with a case-sensitive tiebreak so
//! that no two distinct strings compare equal. The sort is a top-down merge
//! sort: the output for a given set is identical regardless of the order
//! the set was produced in.

use crate::dedup::VocabularySet;
use std::cmp::Ordering;

/// Compare two strings ignoring case, falling back to ordinal order
pub fn compare_ci(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// Merge sort `items` by `compare`
///
/// The left half holds `n / 2` elements. When merging, the right head is
/// taken only if it is strictly less than the left head, so equal elements
/// keep their relative order.
pub fn merge_sort_by<T, F>(items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);

    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);

    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (None, Some(_)) => true,
            (Some(_), None) => false,
            (None, None) => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}

/// Words in case-insensitive order
///
/// Every adjacent pair `(a, b)` satisfies `compare_ci(a, b) != Greater`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedVocabulary(Vec<String>);

impl SortedVocabulary {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a SortedVocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sort an arbitrary sequence of words
pub fn sort_words(words: Vec<String>) -> SortedVocabulary {
    SortedVocabulary(merge_sort_by(words, &|a: &String, b: &String| compare_ci(a, b)))
}

/// Sort a deduplicated vocabulary set
pub fn sort_vocabulary(set: VocabularySet) -> SortedVocabulary {
    sort_words(set.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::deduplicate;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn is_ordered(words: &[String]) -> bool {
        words.windows(2).all(|pair| compare_ci(&pair[0], &pair[1]) != Ordering::Greater)
    }

    #[test]
    fn test_compare_ci() {
        assert_eq!(compare_ci("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_ci("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_ci("app", "apple"), Ordering::Less);
        assert_eq!(compare_ci("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_ci_tiebreak_is_ordinal() {
        // 'A' (0x41) sorts before 'a' (0x61)
        assert_eq!(compare_ci("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_ci("apple", "Apple"), Ordering::Greater);
        assert_eq!(compare_ci("APPLE", "Apple"), Ordering::Less);
    }

    #[test]
    fn test_sort_mixed_case() {
        let sorted = sort_words(owned(&["cat", "Banana", "apple", "Cherry", "banana"]));
        assert_eq!(sorted.into_inner(), owned(&["apple", "Banana", "banana", "cat", "Cherry"]));
    }

    #[test]
    fn test_base_cases() {
        assert!(sort_words(Vec::new()).is_empty());
        assert_eq!(sort_words(owned(&["solo"])).into_inner(), owned(&["solo"]));
    }

    #[test]
    fn test_idempotent() {
        let once = sort_words(owned(&["delta", "Alpha", "charlie", "bravo", "Echo"]));
        let twice = sort_words(once.clone().into_inner());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_permutation_invariance() {
        let base = owned(&["pear", "Apple", "fig", "apple", "KIWI", "banana", "Fig", "date"]);
        let expected = sort_words(base.clone());

        let mut reversed = base.clone();
        reversed.reverse();
        assert_eq!(sort_words(reversed), expected);

        for shift in 1..base.len() {
            let mut rotated = base.clone();
            rotated.rotate_left(shift);
            assert_eq!(sort_words(rotated), expected, "rotation by {}", shift);
        }

        let mut interleaved: Vec<String> = base.iter().step_by(2).cloned().collect();
        interleaved.extend(base.iter().skip(1).step_by(2).cloned());
        assert_eq!(sort_words(interleaved), expected);
    }

    #[test]
    fn test_total_order_on_output() {
        let sorted = sort_words(owned(&["b", "B", "a", "A", "ab", "Ab", "aB", "c"]));
        let words = sorted.as_slice();

        assert!(is_ordered(words));
        for a in words {
            for b in words {
                for c in words {
                    if compare_ci(a, b) != Ordering::Greater && compare_ci(b, c) != Ordering::Greater {
                        assert_ne!(compare_ci(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn test_merge_is_stable_on_ties() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        let sorted = merge_sort_by(items, &|x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn test_sort_vocabulary_from_set() {
        let set = deduplicate(owned(&["cat", "apple", "cat", "bird"]));
        let sorted = sort_vocabulary(set);
        assert_eq!(sorted.into_inner(), owned(&["apple", "bird", "cat"]));
    }

    #[test]
    fn test_large_input_ordered() {
        let words: Vec<String> = (0..1000u32)
            .map(|i| format!("w{:04}", (i * 7919) % 1000))
            .collect();
        let sorted = sort_words(words);

        assert_eq!(sorted.len(), 1000);
        assert!(is_ordered(sorted.as_slice()));
    }
}
