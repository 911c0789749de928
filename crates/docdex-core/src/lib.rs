//! docdex-core — search-index tables for generated documentation.
//!
//! A documentation generator writes its symbol index as a set of small
//! static tables, one per symbol kind and leading character. This crate
//! loads such tables, validates them, and answers lookups.
//!
//! # Architecture
//!
//! ```text
//! records ──► SearchIndexTable ──► Catalog ──► lookup / prefix / resolve
//!   (format)      (table)          (catalog)
//! ```
//!
//! Everything is immutable after load; tables and catalogs are `Send + Sync`
//! and may be shared between readers freely.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
mod key_index;
pub mod table;
pub mod types;

pub use catalog::{Catalog, Hit};
pub use error::{Defect, IndexError, Result};
pub use table::{Lookup, Record, SearchIndexTable};
pub use types::{normalize_key, BucketId, Entry, SymbolKind, Target};
