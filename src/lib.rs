//! docdex — query the search indexes documentation generators emit.
//!
//! A generated documentation site ships its symbol index as small static
//! tables (`html/search/functions_6.js`, …). This crate re-exports the two
//! library layers so that integration tests and the CLI import them from one
//! place, and adds the [`commands`] the `docdex` binary runs.
//!
//! # Architecture
//!
//! ```text
//! sources (doxygen / json files) ──► core (table, catalog) ──► commands
//! ```
//!
//! Everything is synchronous; tables are immutable once loaded.

pub mod commands;

pub use docdex_core::*;
pub use docdex_sources as sources;
