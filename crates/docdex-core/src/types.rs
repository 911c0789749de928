//! Core types for docdex-core.
//!
//! This module defines the data shared by every layer: the searchable
//! [`Entry`], its overload [`Target`]s, and the [`BucketId`] naming the
//! generator file a table came from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One concrete location a display name resolves to.
///
/// Overloads of the same symbol share a display name and differ in
/// `signature`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Link into the generated documentation, e.g.
    /// `../class_adafruit___f_o_n_a.html#ab6fc…`.
    pub anchor: String,
    /// Signature label distinguishing overloads, e.g. `getGPS(float *lat, …)`.
    pub signature: String,
    /// Class or namespace the symbol belongs to.
    pub scope: String,
}

impl Target {
    pub fn new(
        anchor: impl Into<String>,
        signature: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            anchor: anchor.into(),
            signature: signature.into(),
            scope: scope.into(),
        }
    }
}

/// One searchable symbol: a normalised key, the name shown in results, and
/// every target that name can resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Normalised lookup token (see [`normalize_key`]). Unique per table.
    pub key: String,
    /// Human-readable symbol name.
    pub display_name: String,
    /// Ordered overloads. Never empty once the entry is inside a table.
    pub targets: Vec<Target>,
}

impl Entry {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        targets: Vec<Target>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            targets,
        }
    }

    /// Build an entry whose key is derived from the display name.
    pub fn named(display_name: impl Into<String>, targets: Vec<Target>) -> Self {
        let display_name = display_name.into();
        Self {
            key: normalize_key(&display_name),
            display_name,
            targets,
        }
    }

    /// Navigation target `(anchor, scope)` for the overload at `index`.
    pub fn resolve(&self, index: usize) -> crate::Result<(&str, &str)> {
        self.targets
            .get(index)
            .map(|t| (t.anchor.as_str(), t.scope.as_str()))
            .ok_or_else(|| crate::IndexError::IndexOutOfRange {
                key: self.key.clone(),
                index,
                len: self.targets.len(),
            })
    }
}

/// Normalise a symbol name into a lookup key: ASCII letters are lowercased,
/// ASCII digits kept, everything else dropped.
///
/// ```
/// assert_eq!(docdex_core::normalize_key("getSIMCCID"), "getsimccid");
/// assert_eq!(docdex_core::normalize_key("Adafruit_FONA::begin"), "adafruitfonabegin");
/// ```
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Category of symbols a generator bucket file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    All,
    Classes,
    Namespaces,
    Files,
    Functions,
    Variables,
    Typedefs,
    Enums,
    EnumValues,
    Related,
    Defines,
    Groups,
    Pages,
    /// A table loaded from a file whose name is not a generator bucket name.
    Other,
}

/// Section names as they appear in generator bucket file names.
static SECTION_NAMES: phf::Map<&'static str, SymbolKind> = phf::phf_map! {
    "all" => SymbolKind::All,
    "classes" => SymbolKind::Classes,
    "namespaces" => SymbolKind::Namespaces,
    "files" => SymbolKind::Files,
    "functions" => SymbolKind::Functions,
    "variables" => SymbolKind::Variables,
    "typedefs" => SymbolKind::Typedefs,
    "enums" => SymbolKind::Enums,
    "enumvalues" => SymbolKind::EnumValues,
    "related" => SymbolKind::Related,
    "defines" => SymbolKind::Defines,
    "groups" => SymbolKind::Groups,
    "pages" => SymbolKind::Pages,
};

impl SymbolKind {
    /// Look up a generator section name (`functions`, `enumvalues`, …).
    pub fn from_section(name: &str) -> Option<Self> {
        SECTION_NAMES.get(name).copied()
    }

    pub fn section_name(self) -> &'static str {
        match self {
            SymbolKind::All => "all",
            SymbolKind::Classes => "classes",
            SymbolKind::Namespaces => "namespaces",
            SymbolKind::Files => "files",
            SymbolKind::Functions => "functions",
            SymbolKind::Variables => "variables",
            SymbolKind::Typedefs => "typedefs",
            SymbolKind::Enums => "enums",
            SymbolKind::EnumValues => "enumvalues",
            SymbolKind::Related => "related",
            SymbolKind::Defines => "defines",
            SymbolKind::Groups => "groups",
            SymbolKind::Pages => "pages",
            SymbolKind::Other => "other",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_name())
    }
}

/// Identifies one generator bucket file, e.g. `functions_6.js` is
/// `(Functions, 6)`. Ordinals are hexadecimal in file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketId {
    pub kind: SymbolKind,
    pub ordinal: u32,
}

impl BucketId {
    pub fn new(kind: SymbolKind, ordinal: u32) -> Self {
        Self { kind, ordinal }
    }

    /// Parse a bucket file name such as `functions_6.js` or `all_1a.json`.
    /// Any extension is ignored.
    pub fn from_file_name(name: &str) -> crate::Result<Self> {
        let stem = name.split_once('.').map_or(name, |(stem, _)| stem);
        let unknown = || crate::IndexError::UnknownBucket(name.to_string());

        let (section, ordinal) = stem.rsplit_once('_').ok_or_else(unknown)?;
        let kind = SymbolKind::from_section(section).ok_or_else(unknown)?;
        let ordinal = u32::from_str_radix(ordinal, 16).map_err(|_| unknown())?;
        Ok(Self { kind, ordinal })
    }

    /// File name the generator would give this bucket, with `extension`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}_{:x}.{}", self.kind, self.ordinal, extension)
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:x}", self.kind, self.ordinal)
    }
}
