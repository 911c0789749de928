//! Domain-specific assertion macros for docdex harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! entry or target broke the expectation.

use docdex_core::{Entry, SearchIndexTable};

// ---------------------------------------------------------------------------
// Entry assertions
// ---------------------------------------------------------------------------

/// Assert that an entry's targets resolve to the expected `(anchor, scope)`
/// pairs, in order.
///
/// ```rust
/// assert_targets!(entry, [("anchor1", "Adafruit_FONA"), ("anchor2", "Adafruit_FONA")]);
/// ```
#[macro_export]
macro_rules! assert_targets {
    ($entry:expr, [$(($anchor:expr, $scope:expr)),* $(,)?]) => {{
        let entry: &docdex_core::Entry = &$entry;
        let actual: Vec<(&str, &str)> = entry
            .targets
            .iter()
            .map(|t| (t.anchor.as_str(), t.scope.as_str()))
            .collect();
        let expected: Vec<(&str, &str)> = vec![$(($anchor, $scope)),*];
        pretty_assertions::assert_eq!(actual, expected, "targets of `{}`", entry.key);
    }};
}

/// Assert that a lookup result contains an entry with the given key.
#[macro_export]
macro_rules! assert_hit {
    ($hits:expr, $key:expr) => {{
        let key: &str = $key;
        let keys: Vec<&str> = $hits.iter().map(|e| e.key.as_str()).collect();
        if !keys.contains(&key) {
            panic!("assert_hit! failed: `{}` not among hits {:?}", key, keys);
        }
    }};
}

// ---------------------------------------------------------------------------
// Table assertions
// ---------------------------------------------------------------------------

/// Assert two tables are identical entry-for-entry and target-for-target,
/// reporting the first difference instead of dumping both tables.
pub fn assert_same_table(actual: &SearchIndexTable, expected: &SearchIndexTable) {
    for (i, (a, e)) in actual.entries().iter().zip(expected.entries()).enumerate() {
        pretty_assertions::assert_eq!(a, e, "entry #{i} differs");
    }
    assert_eq!(actual.len(), expected.len(), "tables differ in length");
}

/// Assert every entry upholds the table invariants.
pub fn assert_well_formed(table: &SearchIndexTable) {
    let mut keys = std::collections::HashSet::new();
    for entry in table.entries() {
        assert_entry_well_formed(entry);
        assert!(keys.insert(entry.key.as_str()), "duplicate key `{}`", entry.key);
    }
}

pub fn assert_entry_well_formed(entry: &Entry) {
    assert!(!entry.key.is_empty(), "entry with empty key: {entry:?}");
    assert!(!entry.display_name.is_empty(), "entry `{}` has no display name", entry.key);
    assert!(!entry.targets.is_empty(), "entry `{}` has no targets", entry.key);
}
