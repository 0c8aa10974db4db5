use anyhow::{Result, ensure};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use contourgen::{BatchConfig, CommandWorker, SourceEncoding, orchestrator};
use std::{path::PathBuf, sync::Arc};

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
)]
struct Cli {
	/// source elevation data, a file path or URL
	#[arg(long = "sFile", value_name = "path|url")]
	s_file: String,

	/// directory the worker writes output tiles into
	#[arg(long = "oDir", value_name = "path")]
	o_dir: PathBuf,

	/// contour interval in elevation units
	#[arg(long, value_name = "int", default_value_t = 10)]
	increment: u32,

	/// highest zoom level available in the source
	#[arg(long = "sMaxZoom", value_name = "int", default_value_t = 8)]
	s_max_zoom: u8,

	/// encoding of the source elevation tiles
	#[arg(long = "sEncoding", value_enum, default_value_t = SourceEncoding::Mapbox)]
	s_encoding: SourceEncoding,

	/// highest zoom level the worker generates output for
	#[arg(long = "oMaxZoom", value_name = "int", default_value_t = 11)]
	o_max_zoom: u8,

	/// zoom level whose full tile grid is dispatched
	#[arg(long = "oMinZoom", value_name = "int", default_value_t = 5)]
	o_min_zoom: u8,

	/// maximum number of simultaneous worker invocations
	#[arg(long, value_name = "int", default_value_t = 8)]
	concurrency: usize,

	/// worker program invoked once per tile
	#[arg(long, value_name = "program", default_value = "create-contour-tile")]
	worker: String,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

#[tokio::main]
async fn run(cli: Cli) -> Result<()> {
	let config = BatchConfig {
		source_file: cli.s_file,
		output_dir: cli.o_dir,
		increment: cli.increment,
		source_max_zoom: cli.s_max_zoom,
		source_encoding: cli.s_encoding,
		output_max_zoom: cli.o_max_zoom,
		output_min_zoom: cli.o_min_zoom,
	}
	.arc();
	let worker = Arc::new(CommandWorker::new(cli.worker));

	let summary = orchestrator::run(config, worker, cli.concurrency).await?;

	ensure!(
		summary.all_succeeded(),
		"{} of {} worker invocations failed",
		summary.failed,
		summary.dispatched
	);
	Ok(())
}
