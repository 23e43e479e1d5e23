//! Directory linking each clue to the suspect it incriminates
//!
//! A fixed-size hash table with separate chaining. The bucket count never
//! changes after construction.

use std::collections::BTreeSet;

use log::warn;

use super::{owned_text, MAX_CLUE_LEN, MAX_NAME_LEN};
use crate::MansionError;

/// Bucket count of the classic mansion
pub const DEFAULT_BUCKETS: usize = 31;

/// Polynomial rolling hash (`h = h * 31 + byte`, wrapping at 32 bits)
/// reduced to a bucket index.
pub fn hash_string(text: &str, bucket_count: usize) -> Result<usize, MansionError> {
    if bucket_count == 0 {
        return Err(MansionError::ZeroBuckets);
    }
    Ok(rolling_hash(text) as usize % bucket_count)
}

fn rolling_hash(text: &str) -> u32 {
    text.bytes()
        .fold(0u32, |h, byte| h.wrapping_mul(31).wrapping_add(u32::from(byte)))
}

#[derive(Debug)]
struct HashEntry {
    clue: String,
    suspect: String,
    next: Option<Box<HashEntry>>,
}

/// Clue to suspect lookup table
#[derive(Debug)]
pub struct SuspectIndex {
    buckets: Vec<Option<Box<HashEntry>>>,
    len: usize,
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self {
            buckets: std::iter::repeat_with(|| None).take(DEFAULT_BUCKETS).collect(),
            len: 0,
        }
    }

    pub fn with_buckets(bucket_count: usize) -> Result<Self, MansionError> {
        if bucket_count == 0 {
            return Err(MansionError::ZeroBuckets);
        }
        Ok(Self {
            buckets: std::iter::repeat_with(|| None).take(bucket_count).collect(),
            len: 0,
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a clue hashes to. Never fails: an index has at least one bucket.
    pub fn bucket_of(&self, clue: &str) -> usize {
        rolling_hash(clue) as usize % self.buckets.len()
    }

    /// Number of distinct clues mapped
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Map `clue` to `suspect`, replacing any earlier mapping.
    ///
    /// Returns the suspect that was replaced, if any. New clues are linked
    /// at the head of their bucket chain.
    pub fn upsert(&mut self, clue: &str, suspect: &str) -> Result<Option<String>, MansionError> {
        let suspect = owned_text("suspect name", suspect, MAX_NAME_LEN)?;
        let bucket = self.bucket_of(clue);

        let mut node = self.buckets[bucket].as_deref_mut();
        while let Some(entry) = node {
            if entry.clue == clue {
                warn!("clue {:?} reassigned from {:?} to {:?}", clue, entry.suspect, suspect);
                return Ok(Some(std::mem::replace(&mut entry.suspect, suspect)));
            }
            node = entry.next.as_deref_mut();
        }

        let entry = HashEntry {
            clue: owned_text("clue", clue, MAX_CLUE_LEN)?,
            suspect,
            next: self.buckets[bucket].take(),
        };
        self.buckets[bucket] = Some(Box::new(entry));
        self.len += 1;
        Ok(None)
    }

    /// The suspect a clue points at, if any
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut node = self.buckets[self.bucket_of(clue)].as_deref();
        while let Some(entry) = node {
            if entry.clue == clue {
                return Some(&entry.suspect);
            }
            node = entry.next.as_deref();
        }
        None
    }

    /// Every suspect named in the index, sorted and deduplicated
    pub fn suspects(&self) -> Vec<&str> {
        let mut names = BTreeSet::new();
        for head in &self.buckets {
            let mut node = head.as_deref();
            while let Some(entry) = node {
                names.insert(entry.suspect.as_str());
                node = entry.next.as_deref();
            }
        }
        names.into_iter().collect()
    }

}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SuspectIndex {
    fn drop(&mut self) {
        for head in &mut self.buckets {
            let mut node = head.take();
            while let Some(mut entry) = node {
                node = entry.next.take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chain_len(index: &SuspectIndex, bucket: usize) -> usize {
        let mut count = 0;
        let mut node = index.buckets.get(bucket).and_then(|head| head.as_deref());
        while let Some(entry) = node {
            count += 1;
            node = entry.next.as_deref();
        }
        count
    }

    #[test]
    fn test_hash_is_deterministic() {
        for text in ["", "Muddy boots", "Broken glass", "ção"] {
            let bucket = hash_string(text, DEFAULT_BUCKETS).unwrap();
            assert_eq!(hash_string(text, DEFAULT_BUCKETS).unwrap(), bucket);
            assert!(bucket < DEFAULT_BUCKETS);
        }
        assert_eq!(hash_string("", DEFAULT_BUCKETS).unwrap(), 0);
    }

    #[test]
    fn test_hash_matches_rolling_formula() {
        // "ab" = 97 * 31 + 98 = 3105, 3105 % 31 = 5
        assert_eq!(hash_string("ab", 31).unwrap(), 5);
        assert_eq!(hash_string("ab", 1000).unwrap(), 105);
    }

    #[test]
    fn test_hash_into_zero_buckets_is_an_error() {
        assert_eq!(hash_string("Broken glass", 0).unwrap_err(), MansionError::ZeroBuckets);
        assert_eq!(hash_string("", 0).unwrap_err(), MansionError::ZeroBuckets);
    }

    #[test]
    fn test_bucket_of_agrees_with_hash_string() {
        let index = SuspectIndex::with_buckets(7).unwrap();
        for clue in ["Muddy boots", "Broken glass", ""] {
            assert_eq!(index.bucket_of(clue), hash_string(clue, 7).unwrap());
        }
    }

    #[test]
    fn test_hash_wraps_at_32_bits() {
        let long = "z".repeat(64);
        let expected = long
            .bytes()
            .fold(0u64, |h, b| (h * 31 + u64::from(b)) & 0xFFFF_FFFF);
        assert_eq!(hash_string(&long, 31).unwrap(), (expected % 31) as usize);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let index = SuspectIndex::new();
        assert_eq!(index.lookup("Broken glass"), None);
        assert!(index.is_empty());
    }

    #[test]
    fn test_upsert_overwrites() {
        let mut index = SuspectIndex::new();
        assert_eq!(index.upsert("Broken glass", "Suspect A").unwrap(), None);
        assert_eq!(
            index.upsert("Broken glass", "Suspect B").unwrap(),
            Some("Suspect A".to_string())
        );
        assert_eq!(index.lookup("Broken glass"), Some("Suspect B"));
        assert_eq!(index.len(), 1);
        assert_eq!(chain_len(&index, index.bucket_of("Broken glass")), 1);
    }

    #[test]
    fn test_collisions_share_a_chain() {
        let mut index = SuspectIndex::with_buckets(1).unwrap();
        index.upsert("first", "Suspect A").unwrap();
        index.upsert("second", "Suspect B").unwrap();
        index.upsert("third", "Suspect A").unwrap();

        assert_eq!(chain_len(&index, 0), 3);
        assert_eq!(index.lookup("first"), Some("Suspect A"));
        assert_eq!(index.lookup("second"), Some("Suspect B"));
        assert_eq!(index.lookup("fourth"), None);
        assert_eq!(index.suspects(), vec!["Suspect A", "Suspect B"]);
    }

    #[test]
    fn test_zero_buckets_is_rejected() {
        assert_eq!(SuspectIndex::with_buckets(0).unwrap_err(), MansionError::ZeroBuckets);
    }

    #[test]
    fn test_out_of_range_bucket_has_empty_chain() {
        assert_eq!(chain_len(&SuspectIndex::new(), DEFAULT_BUCKETS + 5), 0);
    }
}
