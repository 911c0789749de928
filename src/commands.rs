// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use anyhow::{bail, Context};
use clap::{Subcommand, ValueEnum};
use docdex_core::{config::Config, Catalog, Hit, Target};
use docdex_sources::{load_file, load_paths, render, search_key, SourceFormat};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A parsed subcommand ready to be executed against a loaded index.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Find entries whose key contains QUERY (case-insensitive).
    Lookup {
        query: String,
        /// Match keys that start with QUERY, like the generated site does.
        #[arg(long)]
        prefix: bool,
        /// Maximum number of entries to print.
        #[arg(long)]
        limit: Option<usize>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the anchor and owning scope of one overload of KEY.
    Resolve {
        key: String,
        #[arg(default_value_t = 0)]
        target: usize,
    },
    /// Re-serialise a single table file.
    Export {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Summarise every loaded bucket.
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Doxygen,
}

impl From<ExportFormat> for SourceFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => SourceFormat::Json,
            ExportFormat::Doxygen => SourceFormat::Doxygen,
        }
    }
}

/// JSON shape of one lookup hit.
#[derive(Debug, Serialize)]
struct HitView<'a> {
    bucket: String,
    key: &'a str,
    display_name: &'a str,
    targets: &'a [Target],
}

impl<'a> From<Hit<'a>> for HitView<'a> {
    fn from(hit: Hit<'a>) -> Self {
        Self {
            bucket: hit.bucket.to_string(),
            key: &hit.entry.key,
            display_name: &hit.entry.display_name,
            targets: &hit.entry.targets,
        }
    }
}

/// Execute `command`, writing its output to `out`.
///
/// `indexes` are the `--index` arguments; when empty the configured
/// `[index] paths` are used instead.
pub fn run(
    command: &Command,
    indexes: &[PathBuf],
    config: &Config,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Export { path, format } => export(path, *format, out),
        Command::Lookup {
            query,
            prefix,
            limit,
            json,
        } => {
            let catalog = open_catalog(indexes, config)?;
            let limit = limit.unwrap_or(config.output.limit);
            lookup(&catalog, query, *prefix, limit, *json || config.output.json, out)
        }
        Command::Resolve { key, target } => {
            let catalog = open_catalog(indexes, config)?;
            resolve(&catalog, key, *target, out)
        }
        Command::Stats => {
            let catalog = open_catalog(indexes, config)?;
            stats(&catalog, out)
        }
    }
}

fn open_catalog(indexes: &[PathBuf], config: &Config) -> anyhow::Result<Catalog> {
    let paths: &[PathBuf] = if indexes.is_empty() {
        &config.index.paths
    } else {
        indexes
    };
    if paths.is_empty() {
        bail!("no search index given; pass --index or set [index] paths in the config file");
    }
    let catalog = load_paths(paths).context("loading search index")?;
    tracing::debug!(buckets = catalog.bucket_count(), entries = catalog.len(), "index opened");
    Ok(catalog)
}

fn lookup(
    catalog: &Catalog,
    query: &str,
    prefix: bool,
    limit: usize,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let needle = search_key(query);
    let hits: Vec<Hit<'_>> = if prefix {
        catalog.prefix(&needle).into_iter().take(limit).collect()
    } else {
        catalog.lookup(&needle).take(limit).collect()
    };
    tracing::debug!(query, needle = %needle, hits = hits.len(), "lookup");

    if json {
        let views: Vec<HitView<'_>> = hits.into_iter().map(HitView::from).collect();
        serde_json::to_writer_pretty(&mut *out, &views)?;
        writeln!(out)?;
        return Ok(());
    }

    if hits.is_empty() {
        writeln!(out, "no matches for `{query}`")?;
        return Ok(());
    }
    for hit in hits {
        writeln!(out, "{} [{}]", hit.entry.display_name, hit.bucket)?;
        for (i, target) in hit.entry.targets.iter().enumerate() {
            writeln!(out, "  {i}  {}  {}  {}", target.scope, target.signature, target.anchor)?;
        }
    }
    Ok(())
}

fn resolve(catalog: &Catalog, key: &str, target: usize, out: &mut dyn Write) -> anyhow::Result<()> {
    let Some(hit) = catalog.get(key).or_else(|| catalog.get(&search_key(key))) else {
        bail!("no entry with key `{key}`");
    };
    let (anchor, scope) = hit.entry.resolve(target)?;
    writeln!(out, "{anchor}\t{scope}")?;
    Ok(())
}

fn stats(catalog: &Catalog, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut targets = 0;
    for (bucket, table) in catalog.tables() {
        writeln!(out, "{bucket}\t{} entries\t{} targets", table.len(), table.target_count())?;
        targets += table.target_count();
    }
    writeln!(
        out,
        "total\t{} entries\t{targets} targets\t{} buckets",
        catalog.len(),
        catalog.bucket_count()
    )?;
    Ok(())
}

fn export(path: &Path, format: ExportFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    let table = load_file(path).with_context(|| format!("reading {}", path.display()))?;
    let encoding = SourceFormat::from(format);
    let text = render(&table, encoding)?;
    tracing::debug!(entries = table.len(), extension = encoding.extension(), "export");
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
