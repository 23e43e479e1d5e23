//! Clues the player has collected
//!
//! Stored in an unbalanced binary search tree keyed by clue text. Each clue
//! is kept once, and iteration yields them in ascending order. Insertion is
//! O(log n) on average and O(n) for sorted input, which is fine for the
//! handful of clues a mansion holds.

use std::cmp::Ordering;

use super::{owned_text, MAX_CLUE_LEN};
use crate::MansionError;

#[derive(Debug)]
struct ClueEntry {
    clue: String,
    left: Option<Box<ClueEntry>>,
    right: Option<Box<ClueEntry>>,
}

/// Ordered set of clue texts
#[derive(Debug, Default)]
pub struct ClueCollection {
    root: Option<Box<ClueEntry>>,
    len: usize,
}

impl ClueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue. Returns `false` when the clue is empty or already held.
    pub fn insert(&mut self, clue: &str) -> Result<bool, MansionError> {
        if clue.is_empty() {
            return Ok(false);
        }

        let mut slot = &mut self.root;
        while let Some(entry) = slot {
            slot = match clue.cmp(entry.clue.as_str()) {
                Ordering::Less => &mut entry.left,
                Ordering::Greater => &mut entry.right,
                Ordering::Equal => return Ok(false),
            };
        }

        *slot = Some(Box::new(ClueEntry {
            clue: owned_text("clue", clue, MAX_CLUE_LEN)?,
            left: None,
            right: None,
        }));
        self.len += 1;
        Ok(true)
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(entry) = node {
            node = match clue.cmp(entry.clue.as_str()) {
                Ordering::Less => entry.left.as_deref(),
                Ordering::Greater => entry.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of distinct clues held
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clues in ascending order. Each call starts a fresh traversal.
    pub fn iter(&self) -> Clues<'_> {
        let mut iter = Clues { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl Drop for ClueCollection {
    fn drop(&mut self) {
        let mut pending: Vec<Box<ClueEntry>> = self.root.take().into_iter().collect();
        while let Some(mut entry) = pending.pop() {
            pending.extend(entry.left.take());
            pending.extend(entry.right.take());
        }
    }
}

/// In-order iterator over a [`ClueCollection`]
pub struct Clues<'a> {
    stack: Vec<&'a ClueEntry>,
}

impl<'a> Clues<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueEntry>) {
        while let Some(entry) = node {
            self.stack.push(entry);
            node = entry.left.as_deref();
        }
    }
}

impl<'a> Iterator for Clues<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.push_left_spine(entry.right.as_deref());
        Some(entry.clue.as_str())
    }
}

impl<'a> IntoIterator for &'a ClueCollection {
    type Item = &'a str;
    type IntoIter = Clues<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(clues: &[&str]) -> ClueCollection {
        let mut collection = ClueCollection::new();
        for clue in clues {
            collection.insert(clue).unwrap();
        }
        collection
    }

    #[test]
    fn test_new_collection_is_empty() {
        let clues = ClueCollection::new();
        assert!(clues.is_empty());
        assert_eq!(clues.len(), 0);
        assert_eq!(clues.iter().next(), None);
    }

    #[test]
    fn test_insert_reports_new_clues_only() {
        let mut clues = ClueCollection::new();
        assert!(clues.insert("Broken glass").unwrap());
        assert!(!clues.insert("Broken glass").unwrap());
        assert!(!clues.insert("").unwrap());
        assert_eq!(clues.len(), 1);
        assert!(clues.contains("Broken glass"));
        assert!(!clues.contains("broken glass"));
    }

    #[test]
    fn test_iteration_is_sorted_and_distinct() {
        let clues = collect(&["Muddy boots", "Broken glass", "red fabric thread", "Broken glass", "Knife"]);
        let sorted: Vec<&str> = clues.iter().collect();
        assert_eq!(sorted, vec!["Broken glass", "Knife", "Muddy boots", "red fabric thread"]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let clues = collect(&["b", "a", "c"]);
        let first: Vec<&str> = clues.iter().collect();
        let second: Vec<&str> = (&clues).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_counts_distinct_clues_for_any_order() {
        let words = ["delta", "alpha", "echo", "bravo", "charlie"];
        for rotation in 0..words.len() {
            let mut order: Vec<&str> = words.iter().cycle().skip(rotation).take(words.len()).copied().collect();
            order.extend(["alpha", "", "echo"]);
            let clues = collect(&order);
            assert_eq!(clues.len(), 5);

            let sorted: Vec<&str> = clues.iter().collect();
            assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_sorted_insertion_degenerates_but_stays_correct() {
        let names: Vec<String> = (0..10_000).map(|i| format!("clue {i:05}")).collect();
        let mut clues = ClueCollection::new();
        for name in &names {
            clues.insert(name).unwrap();
        }
        assert_eq!(clues.len(), names.len());
        assert!(clues.iter().eq(names.iter().map(String::as_str)));
    }
}
