//! Merging per-source entry lists into one deduplicated set.

use std::collections::HashSet;

/// Outcome of merging all sources for one run.
#[derive(Debug)]
pub struct MergeResult {
    /// Unique entries in first-occurrence order.
    pub entries: Vec<String>,
    /// How many entries were dropped as exact-string duplicates.
    pub duplicates: usize,
}

/// Concatenate per-source lists in source order and deduplicate by exact
/// string equality, keeping the first occurrence of each entry.
///
/// Entries are opaque validated strings at this point; no CIDR math or
/// canonicalization happens here, so `2001:db8::1` and
/// `2001:db8:0:0:0:0:0:1` are distinct entries.
pub fn merge(lists: Vec<Vec<String>>) -> MergeResult {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    let mut duplicates = 0;

    for entry in lists.into_iter().flatten() {
        if seen.insert(entry.clone()) {
            entries.push(entry);
        } else {
            duplicates += 1;
        }
    }

    MergeResult {
        entries,
        duplicates,
    }
}
