//! SearchIndexTable — one loaded, immutable bucket of searchable entries.
//!
//! A table is built once by [`SearchIndexTable::load`] and never mutated
//! afterwards. Loading validates every entry and fails atomically: either the
//! whole table is returned or an [`IndexError::MalformedEntry`] naming the
//! first bad entry.

use crate::error::{Defect, IndexError};
use crate::key_index::KeyIndex;
use crate::types::{Entry, Target};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Persisted record form of one entry:
/// `[key, [displayName, [[anchor, signature, scope], ...]]]`.
pub type Record = (String, (String, Vec<(String, String, String)>));

#[derive(Clone)]
pub struct SearchIndexTable {
    entries: Vec<Entry>,
    keys: KeyIndex,
}

impl SearchIndexTable {
    /// Validate `entries` and build the table, preserving their order.
    pub fn load(entries: impl IntoIterator<Item = Entry>) -> crate::Result<Self> {
        let entries: Vec<Entry> = entries.into_iter().collect();

        {
            let mut seen = HashSet::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                if let Some(defect) = check_entry(entry) {
                    return Err(IndexError::malformed(index, defect));
                }
                if !seen.insert(entry.key.as_str()) {
                    let defect = Defect::DuplicateKey(entry.key.clone());
                    return Err(IndexError::malformed(index, defect));
                }
            }
        }

        let rows = entries.iter().enumerate().map(|(row, e)| (e.key.as_str(), row));
        let keys = KeyIndex::build(rows)?;
        tracing::debug!(
            entries = entries.len(),
            keys = keys.len(),
            "search index table loaded"
        );
        Ok(Self { entries, keys })
    }

    /// Build a table from persisted records.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> crate::Result<Self> {
        Self::load(records.into_iter().map(|(key, (display_name, targets))| {
            let targets = targets
                .into_iter()
                .map(|(anchor, signature, scope)| Target { anchor, signature, scope })
                .collect();
            Entry { key, display_name, targets }
        }))
    }

    pub fn to_records(&self) -> Vec<Record> {
        self.entries
            .iter()
            .map(|e| {
                let targets = e
                    .targets
                    .iter()
                    .map(|t| (t.anchor.clone(), t.signature.clone(), t.scope.clone()))
                    .collect();
                (e.key.clone(), (e.display_name.clone(), targets))
            })
            .collect()
    }

    /// Entries whose key contains `query`, ignoring case, in table order.
    ///
    /// The returned iterator is lazy and `Clone`; an empty query matches
    /// every entry.
    pub fn lookup(&self, query: &str) -> Lookup<'_> {
        Lookup {
            entries: self.entries.iter(),
            needle: query.to_lowercase(),
        }
    }

    /// Entries whose key starts with `query` (lowercased), in key order.
    pub fn prefix(&self, query: &str) -> Vec<&Entry> {
        self.keys
            .prefix_rows(&query.to_lowercase())
            .into_iter()
            .map(|row| &self.entries[row])
            .collect()
    }

    /// Exact key lookup.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.keys.get(key).map(|row| &self.entries[row])
    }

    /// Navigation target `(anchor, scope)` for overload `target` of `entry`.
    pub fn resolve<'e>(
        &self,
        entry: &'e Entry,
        target: usize,
    ) -> crate::Result<(&'e str, &'e str)> {
        entry.resolve(target)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of targets across all entries.
    pub fn target_count(&self) -> usize {
        self.entries.iter().map(|e| e.targets.len()).sum()
    }
}

fn check_entry(entry: &Entry) -> Option<Defect> {
    if entry.key.is_empty() {
        return Some(Defect::MissingKey);
    }
    if entry.display_name.is_empty() {
        return Some(Defect::MissingDisplayName);
    }
    if entry.targets.is_empty() {
        return Some(Defect::NoTargets);
    }
    entry
        .targets
        .iter()
        .position(|t| t.anchor.is_empty())
        .map(Defect::MissingAnchor)
}

impl PartialEq for SearchIndexTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for SearchIndexTable {}

impl std::fmt::Debug for SearchIndexTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndexTable")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a SearchIndexTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Lazy substring lookup over a table. See [`SearchIndexTable::lookup`].
#[derive(Debug, Clone)]
pub struct Lookup<'a> {
    entries: std::slice::Iter<'a, Entry>,
    needle: String,
}

impl<'a> Iterator for Lookup<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let needle = self.needle.as_str();
        self.entries.find(|e| key_contains(&e.key, needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl FusedIterator for Lookup<'_> {}

/// `needle` must already be lowercase.
fn key_contains(key: &str, needle: &str) -> bool {
    // Only plain lowercase ASCII is its own lowercase; titlecase and other
    // non-ASCII letters still change under `to_lowercase`.
    if key.bytes().all(|b| b.is_ascii() && !b.is_ascii_uppercase()) {
        key.contains(needle)
    } else {
        key.to_lowercase().contains(needle)
    }
}
