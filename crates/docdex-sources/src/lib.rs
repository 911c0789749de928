//! docdex-sources — on-disk index formats for docdex.
//!
//! Each adapter turns generator output into [`docdex_core::SearchIndexTable`]
//! values and back. [`loader`] ties them to the filesystem.

pub mod doxygen;
pub mod js;
pub mod loader;

pub use doxygen::{parse_search_data, render_search_data, search_key};
pub use loader::{load_dir, load_file, load_paths, render, SourceFormat};
