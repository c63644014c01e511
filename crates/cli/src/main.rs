//! Command-line driver for the demo chain.
//!
//! Loads the sample tables (built in, or from a TOML dataset), builds the demo
//! chain and runs it once per key, printing one line (or JSON object) per run.

use chainsearch_primitives::SearchKey;
use chainsearch_sample::{Contact, Dataset, demo_chain};
use clap::Parser;

mod cli;
mod report;

use cli::Cli;
use report::Report;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let dataset = match &cli.dataset {
		Some(path) => Dataset::load(path)?,
		None => Dataset::builtin(),
	};
	let store = dataset.into_store()?;
	let chain = demo_chain(store.clone(), &cli.namespace)?;
	tracing::info!(namespace = chain.namespace(), tables = store.tables().len(), "chain ready");

	for raw in &cli.keys {
		let key = SearchKey::parse(raw);
		let before = store.len::<Contact>()?;
		let outcome = chain.run(key.clone())?;
		let inserted = store.len::<Contact>()? > before;
		let report = Report { key, inserted, outcome };

		if cli.json {
			println!("{}", serde_json::to_string(&report)?);
		} else {
			println!("{}", report.line());
		}
	}

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("warn,chainsearch=debug")
		} else {
			EnvFilter::new("warn,chainsearch=info")
		}
	});

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
