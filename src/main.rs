use clap::Parser;
use docdex::commands::{self, Command};
use docdex::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docdex", about = "Query generated documentation search indexes")]
struct Cli {
    /// Write debug logs to stderr.
    #[arg(long, global = true)]
    debug: bool,

    /// Bucket file, canonical JSON table, or generator search/ directory.
    /// Repeatable; defaults to `[index] paths` from the config file.
    #[arg(long = "index", short = 'i', global = true)]
    indexes: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config unreadable, using defaults");
        Config::defaults()
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &cli.indexes, &config, &mut out)
}
