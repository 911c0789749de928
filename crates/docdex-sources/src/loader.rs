//! Loading tables and catalogs from disk.
//!
//! A path may name a Doxygen bucket file (`*.js`), a canonical table
//! (`*.json`), or a generator `search/` directory. Directories are scanned
//! for bucket files; anything whose name is not a bucket name (`search.js`,
//! `searchdata.js`, stylesheets) is skipped.

use crate::doxygen;
use docdex_core::{format, BucketId, Catalog, IndexError, Result, SearchIndexTable, SymbolKind};
use std::path::{Path, PathBuf};

/// On-disk table encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Doxygen,
    Json,
}

impl SourceFormat {
    /// Guess from the file extension; anything but `.json` is read as Doxygen.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Doxygen,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Doxygen => "js",
            SourceFormat::Json => "json",
        }
    }
}

/// Read and parse one table file.
pub fn load_file(path: &Path) -> Result<SearchIndexTable> {
    let text = std::fs::read_to_string(path).map_err(|e| IndexError::io(path, e))?;
    let table = match SourceFormat::from_path(path) {
        SourceFormat::Json => format::from_json_str(&text)?,
        SourceFormat::Doxygen => doxygen::parse_search_data(&text)?,
    };
    tracing::debug!(path = %path.display(), entries = table.len(), "table file loaded");
    Ok(table)
}

/// Load every bucket file in a generator `search/` directory.
///
/// Fails as a whole if any bucket file is unreadable or malformed.
pub fn load_dir(dir: &Path) -> Result<Catalog> {
    let mut buckets: Vec<(BucketId, PathBuf)> = Vec::new();
    for item in std::fs::read_dir(dir).map_err(|e| IndexError::io(dir, e))? {
        let path = item.map_err(|e| IndexError::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !(name.ends_with(".js") || name.ends_with(".json")) {
            continue;
        }
        match BucketId::from_file_name(name) {
            Ok(bucket) => buckets.push((bucket, path.clone())),
            Err(_) => tracing::debug!(file = name, "skipping non-bucket file"),
        }
    }
    buckets.sort();

    let mut catalog = Catalog::new();
    for (bucket, path) in buckets {
        catalog.insert(bucket, load_file(&path)?);
    }
    tracing::info!(
        dir = %dir.display(),
        buckets = catalog.bucket_count(),
        entries = catalog.len(),
        "search directory loaded"
    );
    Ok(catalog)
}

/// Load several paths (files or directories) into one catalog.
///
/// Files whose names are not bucket names are filed under
/// [`SymbolKind::Other`], numbered in argument order.
pub fn load_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    let mut other = 0u32;
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            catalog.extend(load_dir(path)?);
            continue;
        }
        let bucket = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| BucketId::from_file_name(n).ok())
            .unwrap_or_else(|| {
                other += 1;
                BucketId::new(SymbolKind::Other, other - 1)
            });
        catalog.insert(bucket, load_file(path)?);
    }
    Ok(catalog)
}

/// Serialise one table in `encoding`.
pub fn render(table: &SearchIndexTable, encoding: SourceFormat) -> Result<String> {
    match encoding {
        SourceFormat::Doxygen => Ok(doxygen::render_search_data(table)),
        SourceFormat::Json => format::to_json_string(table, true),
    }
}
