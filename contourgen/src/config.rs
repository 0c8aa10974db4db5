//! Run configuration: the immutable parameter set shared by every work unit.

use anyhow::{Result, ensure};
use clap::ValueEnum;
use contourgen_core::MAX_ZOOM_LEVEL;
use std::{fmt::Display, path::PathBuf, sync::Arc};

/// Encoding of the source elevation tiles.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
	#[default]
	Mapbox,
	Terrarium,
}

impl SourceEncoding {
	pub fn as_str(&self) -> &str {
		match self {
			SourceEncoding::Mapbox => "mapbox",
			SourceEncoding::Terrarium => "terrarium",
		}
	}
}

impl Display for SourceEncoding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// All processing parameters of one batch run.
///
/// Resolved once at startup, then shared read-only (behind an `Arc`) by every
/// work unit; no component mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
	/// Path or URL of the source elevation data.
	pub source_file: String,
	/// Directory the worker writes output tiles into.
	pub output_dir: PathBuf,
	/// Contour interval in elevation units.
	pub increment: u32,
	/// Highest zoom level available in the source.
	pub source_max_zoom: u8,
	/// Encoding of the source elevation tiles.
	pub source_encoding: SourceEncoding,
	/// Highest zoom level the worker generates output for.
	pub output_max_zoom: u8,
	/// Zoom level whose full grid is enumerated and dispatched.
	pub output_min_zoom: u8,
}

impl BatchConfig {
	/// Checks the invariants that must hold before any work is dispatched.
	pub fn check(&self) -> Result<()> {
		ensure!(!self.source_file.is_empty(), "source file must not be empty");
		ensure!(
			!self.output_dir.as_os_str().is_empty(),
			"output directory must not be empty"
		);
		ensure!(self.increment > 0, "increment ({}) must be > 0", self.increment);
		ensure!(
			self.output_min_zoom <= MAX_ZOOM_LEVEL,
			"output min zoom ({}) must be <= {MAX_ZOOM_LEVEL}",
			self.output_min_zoom
		);
		Ok(())
	}

	/// Wraps the configuration for sharing across concurrent work units.
	pub fn arc(self) -> Arc<BatchConfig> {
		Arc::new(self)
	}
}
