//! Catalog — several bucket tables queried as one index.
//!
//! The generator splits its index into one file per symbol kind and leading
//! character. A [`Catalog`] holds the loaded tables sorted by [`BucketId`]
//! and runs each query over all of them in bucket order. The same key may
//! appear in several buckets (`all_*` repeats `functions_*`); each bucket
//! contributes its own hit.

use crate::table::{Lookup, SearchIndexTable};
use crate::types::{BucketId, Entry};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<(BucketId, SearchIndexTable)>,
}

/// One search result: the matching entry and the bucket it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    pub bucket: BucketId,
    pub entry: &'a Entry,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table. Tables stay sorted by bucket; tables sharing a bucket
    /// keep insertion order.
    pub fn insert(&mut self, bucket: BucketId, table: SearchIndexTable) {
        let at = self.tables.partition_point(|(b, _)| *b <= bucket);
        tracing::debug!(%bucket, entries = table.len(), "catalog: table added");
        self.tables.insert(at, (bucket, table));
    }

    /// Lazy substring lookup across every table, in bucket order.
    pub fn lookup<'a>(&'a self, query: &str) -> impl Iterator<Item = Hit<'a>> + Clone + 'a {
        let lookups: Vec<(BucketId, Lookup<'a>)> = self
            .tables
            .iter()
            .map(|(bucket, table)| (*bucket, table.lookup(query)))
            .collect();
        lookups
            .into_iter()
            .flat_map(|(bucket, lookup)| lookup.map(move |entry| Hit { bucket, entry }))
    }

    /// Prefix matches across every table, in bucket order then key order.
    pub fn prefix(&self, query: &str) -> Vec<Hit<'_>> {
        self.tables
            .iter()
            .flat_map(|(bucket, table)| {
                table
                    .prefix(query)
                    .into_iter()
                    .map(move |entry| Hit { bucket: *bucket, entry })
            })
            .collect()
    }

    /// First entry with exactly this key, in bucket order.
    pub fn get(&self, key: &str) -> Option<Hit<'_>> {
        self.tables.iter().find_map(|(bucket, table)| {
            table.get(key).map(|entry| Hit { bucket: *bucket, entry })
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = (BucketId, &SearchIndexTable)> {
        self.tables.iter().map(|(bucket, table)| (*bucket, table))
    }

    /// Number of tables.
    pub fn bucket_count(&self) -> usize {
        self.tables.len()
    }

    /// Total entries across all tables.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|(_, t)| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<(BucketId, SearchIndexTable)> for Catalog {
    fn extend<I: IntoIterator<Item = (BucketId, SearchIndexTable)>>(&mut self, iter: I) {
        for (bucket, table) in iter {
            self.insert(bucket, table);
        }
    }
}

impl IntoIterator for Catalog {
    type Item = (BucketId, SearchIndexTable);
    type IntoIter = std::vec::IntoIter<(BucketId, SearchIndexTable)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}

impl FromIterator<(BucketId, SearchIndexTable)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (BucketId, SearchIndexTable)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}
