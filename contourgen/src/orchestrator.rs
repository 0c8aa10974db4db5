//! Top-level driver: enumerate the output grid, pair every coordinate with
//! the shared configuration, and feed the result through the dispatch pool.

use crate::{
	config::BatchConfig,
	pool::{DispatchPool, DispatchSummary},
	worker::{TileWorker, WorkUnit},
};
use anyhow::{Context, Result};
use contourgen_core::TileBBox;
use std::sync::Arc;

/// Runs one batch: every tile of the full grid at `config.output_min_zoom`
/// is dispatched to `worker`, at most `concurrency` at a time.
///
/// Resolves only after the whole grid has been admitted and every in-flight
/// invocation has completed. Validation and enumeration errors abort before
/// any work is dispatched; individual worker failures do not abort the batch
/// and are reported through the returned summary.
pub async fn run(config: Arc<BatchConfig>, worker: Arc<dyn TileWorker>, concurrency: usize) -> Result<DispatchSummary> {
	config.check().context("invalid configuration")?;

	let bbox = TileBBox::new_full(config.output_min_zoom).context("invalid output min zoom")?;

	eprintln!(
		"generating contours for {} tiles at zoom level {}",
		bbox.count_tiles(),
		bbox.level
	);
	log::info!(
		"source: {:?} ({}, max zoom {}), output: {:?} (zoom {}..={}), increment: {}, concurrency: {}",
		config.source_file,
		config.source_encoding,
		config.source_max_zoom,
		config.output_dir,
		config.output_min_zoom,
		config.output_max_zoom,
		config.increment,
		concurrency
	);

	let units = bbox
		.into_iter_coords()
		.map(move |coord| WorkUnit::new(coord, Arc::clone(&config)));

	let summary = DispatchPool::new(concurrency).run(units, worker).await;

	eprintln!(
		"finished: {} tiles dispatched, {} failed",
		summary.dispatched, summary.failed
	);

	Ok(summary)
}
