//! Test builders — ergonomic constructors for tables.
//!
//! These are for readability in tests, not production use. They panic on
//! invalid input rather than returning `Result`.

use docdex_core::{Entry, SearchIndexTable, Target};

// ---------------------------------------------------------------------------
// TableBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchIndexTable`] fixtures.
///
/// # Example
///
/// ```rust
/// let table = TableBuilder::new()
///     .entry("getGPS")
///     .overload("#a1", "getGPS(uint8_t arg)", "Adafruit_FONA")
///     .overload("#a2", "getGPS(float *lat)", "Adafruit_FONA")
///     .entry("getIMEI")
///     .member("#a3", "Adafruit_FONA")
///     .build();
/// ```
#[derive(Default)]
pub struct TableBuilder {
    entries: Vec<Entry>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new entry; its key is derived from `display_name`.
    pub fn entry(mut self, display_name: &str) -> Self {
        self.entries.push(Entry::named(display_name, Vec::new()));
        self
    }

    /// Add a target with an explicit signature to the current entry.
    pub fn overload(mut self, anchor: &str, signature: &str, scope: &str) -> Self {
        self.current().targets.push(Target::new(anchor, signature, scope));
        self
    }

    /// Add a target whose signature is the display name.
    pub fn member(mut self, anchor: &str, scope: &str) -> Self {
        let entry = self.current();
        let signature = entry.display_name.clone();
        entry.targets.push(Target::new(anchor, signature, scope));
        self
    }

    pub fn build(self) -> SearchIndexTable {
        SearchIndexTable::load(self.entries).expect("builder produced a malformed table")
    }

    fn current(&mut self) -> &mut Entry {
        self.entries.last_mut().expect("call .entry() before adding targets")
    }
}

/// The FONA `g` bucket reduced to a few entries, built by hand.
pub fn small_fona_table() -> SearchIndexTable {
    TableBuilder::new()
        .entry("getBattVoltage")
        .overload("#bv1", "getBattVoltage()", "Adafruit_FONA")
        .overload("#bv2", "getBattVoltage()", "Adafruit_FONA_3G")
        .entry("getGPS")
        .overload("#gps1", "getGPS(uint8_t arg, char *buffer, uint8_t maxbuff)", "Adafruit_FONA")
        .overload("#gps2", "getGPS(float *lat, float *lon)", "Adafruit_FONA")
        .entry("getIMEI")
        .member("#imei", "Adafruit_FONA")
        .entry("GPSstatus")
        .member("#gpsstatus", "Adafruit_FONA")
        .build()
}
