//! FST-backed key index.
//!
//! Maps every entry key to its row in the owning table so prefix queries
//! stream matching keys in lexicographic order without scanning the table.

use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, Streamer};
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct KeyIndex {
    map: Arc<Map<Vec<u8>>>,
}

impl KeyIndex {
    /// Build from `(key, row)` pairs. Keys must be unique.
    pub(crate) fn build<'a>(
        keys: impl IntoIterator<Item = (&'a str, usize)>,
    ) -> crate::Result<Self> {
        let mut sorted: Vec<(&str, u64)> = keys
            .into_iter()
            .map(|(k, row)| (k, row as u64))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        let map = Map::from_iter(sorted)?;
        Ok(Self { map: Arc::new(map) })
    }

    pub(crate) fn get(&self, key: &str) -> Option<usize> {
        self.map.get(key).map(|row| row as usize)
    }

    /// Rows whose key starts with `prefix`, in key order.
    pub(crate) fn prefix_rows(&self, prefix: &str) -> Vec<usize> {
        let matcher = Str::new(prefix).starts_with();
        let mut stream = self.map.search(matcher).into_stream();
        let mut rows = Vec::new();
        while let Some((_, row)) = stream.next() {
            rows.push(row as usize);
        }
        rows
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}

impl std::fmt::Debug for KeyIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyIndex").field("keys", &self.map.len()).finish()
    }
}
