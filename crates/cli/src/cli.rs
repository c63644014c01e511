use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chainsearch")]
#[command(about = "Look up ids across the sample tables, inserting a contact when nobody matches")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Keys to run the chain for, in order
	#[arg(default_values = ["1001", "5005"])]
	pub keys: Vec<String>,

	/// TOML dataset to load instead of the built-in tables
	#[arg(long, short = 'd', value_name = "PATH")]
	pub dataset: Option<PathBuf>,

	/// Namespace tag for cached specializations
	#[arg(long, default_value = chainsearch_chain::DEFAULT_NAMESPACE)]
	pub namespace: String,

	/// Print one JSON object per key
	#[arg(long)]
	pub json: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
