//! This module defines the `TileCoord3` structure, representing one cell of a
//! power-of-two quadtree grid: a zoom level plus an (x, y) position inside the
//! 2^level × 2^level grid of that level.
//!
//! Coordinates are stored as `u64` so that grids whose dimension exceeds the
//! 32-bit range are representable without truncation.
//!
//! # Examples
//!
//! ```
//! use contourgen_core::TileCoord3;
//!
//! let coord = TileCoord3::new(5, 6, 7).unwrap();
//! assert_eq!(coord.level, 5);
//! assert_eq!(coord.x, 6);
//! assert_eq!(coord.y, 7);
//! assert!(coord.is_valid());
//! ```

use anyhow::{Result, ensure};
use std::fmt::{self, Debug};

/// The highest zoom level whose grid dimension (2^level) fits into a `u64`
/// coordinate.
pub const MAX_ZOOM_LEVEL: u8 = 63;

#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord3 {
	pub x: u64,
	pub y: u64,
	pub level: u8,
}

impl TileCoord3 {
	/// Creates a new coordinate, failing when the zoom level is out of range.
	pub fn new(level: u8, x: u64, y: u64) -> Result<TileCoord3> {
		ensure!(
			level <= MAX_ZOOM_LEVEL,
			"level ({level}) must be <= {MAX_ZOOM_LEVEL}"
		);
		Ok(TileCoord3 { x, y, level })
	}

	/// Checks that x and y lie inside the grid of this coordinate's level.
	pub fn is_valid(&self) -> bool {
		if self.level > MAX_ZOOM_LEVEL {
			return false;
		}
		// 2^63 still fits into u64, so this cannot overflow.
		let max = 2u64.pow(u32::from(self.level));
		(self.x < max) && (self.y < max)
	}

	/// Row-major position of this coordinate within its level's full grid.
	pub fn sort_index(&self) -> u128 {
		let size = 2u128.pow(u32::from(self.level));
		size * u128::from(self.y) + u128::from(self.x)
	}
}

impl Debug for TileCoord3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileCoord3({}, [{}, {}])", &self.level, &self.x, &self.y))
	}
}

impl PartialOrd for TileCoord3 {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		match self.level.partial_cmp(&other.level) {
			Some(core::cmp::Ordering::Equal) => {}
			ord => return ord,
		}
		match self.y.partial_cmp(&other.y) {
			Some(core::cmp::Ordering::Equal) => {}
			ord => return ord,
		}
		self.x.partial_cmp(&other.x)
	}
}
