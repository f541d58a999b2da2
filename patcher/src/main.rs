use anyhow::Result;
use clap::Parser;
use patcher::{patch_file, GENESIS_BLOCK_RULE};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Rewrites the BRC-20 genesis block constant of a generated source file in place.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
	/// File to patch
	target: PathBuf,
}

fn init_logging() {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_ansi(false)
		.with_target(false)
		.init();
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging();

	patch_file(&args.target, &GENESIS_BLOCK_RULE)?;

	Ok(())
}
