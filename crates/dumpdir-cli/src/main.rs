//! dumpdir — prints every regular file in a directory as a labelled text block.
//!
//! With no arguments the current working directory is used. Logs go to
//! stderr so stdout carries only the blocks.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dumpdir_core::{Config, Dumper};

#[derive(Debug, Parser)]
#[command(name = "dumpdir", version, about = "Print the contents of every file in a directory")]
struct Cli {
    /// Directory to dump (defaults to the current working directory)
    dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    fn resolve_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("failed to get current directory"),
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => Ok(Config::default()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let config = cli.load_config()?;
    let dir = cli.resolve_dir()?;
    tracing::debug!(dir = %dir.display(), ?config, "starting");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    Dumper::new(&config)
        .dump_directory(&dir, &mut out)
        .with_context(|| format!("failed to dump {}", dir.display()))?;
    out.flush()?;

    Ok(())
}
