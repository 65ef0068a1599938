use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use cubegen_emit::{LatticeEmitter, LiteralWriter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only records.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();
    tracing::debug!(?config, "resolved grid config");

    let emitter = LatticeEmitter::new(config).context("invalid grid configuration")?;

    let stdout = io::stdout();
    let mut writer = LiteralWriter::new(BufWriter::new(stdout.lock()));
    let written = writer
        .write_all_from(&emitter)
        .context("failed to write records")?;
    writer.flush().context("failed to flush output")?;

    tracing::info!(
        records = written,
        half_extent = config.half_extent,
        "lattice emitted"
    );
    Ok(())
}
