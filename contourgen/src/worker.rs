//! The per-tile worker seam: work units and the external worker invocation.
//!
//! The dispatch pool only knows the [`TileWorker`] trait; production runs use
//! [`CommandWorker`], which spawns one external process per tile. Tests plug
//! in their own implementations to observe pool behavior.

use crate::config::BatchConfig;
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use contourgen_core::TileCoord3;
use std::sync::Arc;
use tokio::process::Command;

/// One independent unit of dispatch: a tile address plus the shared run
/// configuration.
///
/// Created by pairing the coordinate enumeration with the configuration,
/// consumed exactly once by the dispatch pool.
#[derive(Debug, Clone)]
pub struct WorkUnit {
	pub coord: TileCoord3,
	pub config: Arc<BatchConfig>,
}

impl WorkUnit {
	pub fn new(coord: TileCoord3, config: Arc<BatchConfig>) -> WorkUnit {
		WorkUnit { coord, config }
	}

	/// The argument vector passed to the worker program:
	/// `x y z source_file source_encoding source_max_zoom increment
	/// output_max_zoom output_dir`.
	pub fn worker_args(&self) -> Vec<String> {
		vec![
			self.coord.x.to_string(),
			self.coord.y.to_string(),
			self.coord.level.to_string(),
			self.config.source_file.clone(),
			self.config.source_encoding.as_str().to_string(),
			self.config.source_max_zoom.to_string(),
			self.config.increment.to_string(),
			self.config.output_max_zoom.to_string(),
			self.config.output_dir.to_string_lossy().to_string(),
		]
	}
}

/// Processes one work unit. Implementations must be safe to call from many
/// tasks at once; the pool shares one worker across all in-flight units.
#[async_trait]
pub trait TileWorker: Send + Sync {
	async fn process(&self, unit: &WorkUnit) -> Result<()>;
}

/// Invokes an external program once per tile, passing the work unit as a
/// fixed argument vector. The program's outputs (files under the output
/// directory) are opaque to the orchestrator.
#[derive(Debug, Clone)]
pub struct CommandWorker {
	program: String,
}

impl CommandWorker {
	pub fn new(program: String) -> CommandWorker {
		CommandWorker { program }
	}

	pub fn program(&self) -> &str {
		&self.program
	}
}

#[async_trait]
impl TileWorker for CommandWorker {
	async fn process(&self, unit: &WorkUnit) -> Result<()> {
		let status = Command::new(&self.program)
			.args(unit.worker_args())
			.status()
			.await
			.with_context(|| format!("failed to spawn worker {:?}", self.program))?;

		ensure!(
			status.success(),
			"worker {:?} for tile {:?} exited with {status}",
			self.program,
			unit.coord
		);
		Ok(())
	}
}
