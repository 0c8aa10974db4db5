//! The dispatch pool: a bounded-concurrency executor over a stream of work
//! units.
//!
//! Work units are admitted in enumeration order, one tokio task per unit,
//! with at most `concurrency` invocations in flight. As soon as one
//! invocation completes the next pending unit is admitted; admission is
//! continuous, never batch-lockstep. Completion order is unconstrained since
//! tiles are disjoint.

use crate::worker::{TileWorker, WorkUnit};
use futures::{StreamExt, future::ready, stream};
use std::sync::Arc;

/// Aggregate outcome of one pool run.
///
/// Failures are collected and reported, never fatal to the batch: a failing
/// tile is logged, counted, and the run continues with the remaining units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
	/// Number of work units admitted to the pool.
	pub dispatched: u64,
	/// Number of worker invocations that failed.
	pub failed: u64,
}

impl DispatchSummary {
	pub fn all_succeeded(&self) -> bool {
		self.failed == 0
	}
}

/// A bounded-concurrency executor for work units.
pub struct DispatchPool {
	concurrency: usize,
}

impl DispatchPool {
	/// Creates a pool admitting at most `concurrency` simultaneous worker
	/// invocations. A bound of 0 is clamped to 1.
	pub fn new(concurrency: usize) -> DispatchPool {
		DispatchPool {
			concurrency: concurrency.max(1),
		}
	}

	pub fn concurrency(&self) -> usize {
		self.concurrency
	}

	/// Consumes `units` and invokes `worker` for each, resolving once the
	/// sequence is exhausted and every in-flight invocation has completed.
	///
	/// An empty sequence completes immediately with zero invocations.
	pub async fn run<I>(&self, units: I, worker: Arc<dyn TileWorker>) -> DispatchSummary
	where
		I: IntoIterator<Item = WorkUnit>,
		I::IntoIter: Send,
	{
		let mut summary = DispatchSummary::default();

		stream::iter(units)
			.map(|unit| {
				let worker = Arc::clone(&worker);
				tokio::spawn(async move {
					let result = worker.process(&unit).await;
					(unit, result)
				})
			})
			.buffer_unordered(self.concurrency)
			.for_each(|joined| {
				match joined {
					Ok((unit, Ok(()))) => {
						summary.dispatched += 1;
						log::debug!("tile {:?} done", unit.coord);
					}
					Ok((unit, Err(error))) => {
						summary.dispatched += 1;
						summary.failed += 1;
						log::warn!("tile {:?} failed: {error:#}", unit.coord);
					}
					Err(error) => {
						// A panicking worker task still counts as a failure.
						summary.dispatched += 1;
						summary.failed += 1;
						log::warn!("worker task aborted: {error}");
					}
				}
				ready(())
			})
			.await;

		summary
	}
}
