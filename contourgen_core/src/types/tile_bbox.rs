//! This module defines the `TileBBox` struct, representing a rectangular
//! range of tiles at one zoom level.
//!
//! The batch orchestrator builds a full-grid bounding box for its output zoom
//! level and walks it in row-major order to produce one work unit per tile.
//!
//! # Examples
//!
//! ```
//! use contourgen_core::TileBBox;
//!
//! let bbox = TileBBox::new_full(2).unwrap();
//! assert_eq!(bbox.count_tiles(), 16);
//!
//! let coords: Vec<_> = bbox.iter_coords().collect();
//! assert_eq!(coords.len(), 16);
//! assert_eq!(coords[0].x, 0);
//! assert_eq!(coords[0].y, 0);
//! ```

use crate::types::{MAX_ZOOM_LEVEL, TileCoord3};
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::fmt::{self, Debug};

/// A bounding box of tile coordinates at a fixed zoom level.
///
/// # Fields
/// - `level`: Zoom level (0..=63).
/// - `x_min`, `y_min`: Minimum tile coordinates.
/// - `x_max`, `y_max`: Maximum tile coordinates.
/// - `max`: Largest valid coordinate at the given zoom level (`2^level - 1`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TileBBox {
	/// Zoom level of the bounding box.
	pub level: u8,
	/// Minimum x-coordinate.
	pub x_min: u64,
	/// Minimum y-coordinate.
	pub y_min: u64,
	/// Maximum x-coordinate.
	pub x_max: u64,
	/// Maximum y-coordinate.
	pub y_max: u64,
	/// Maximum valid coordinate based on zoom level.
	pub max: u64,
}

impl TileBBox {
	/// Creates a new `TileBBox` with specified coordinates and zoom level.
	///
	/// # Errors
	///
	/// - If `level` > 63.
	/// - If any coordinate exceeds the maximum allowed by the zoom level.
	/// - If `x_min > x_max` or `y_min > y_max`.
	pub fn new(level: u8, x_min: u64, y_min: u64, x_max: u64, y_max: u64) -> Result<TileBBox> {
		ensure!(
			level <= MAX_ZOOM_LEVEL,
			"level ({level}) must be <= {MAX_ZOOM_LEVEL}"
		);

		let max = 2u64.pow(u32::from(level)) - 1;

		ensure!(x_max <= max, "x_max ({x_max}) must be <= max ({max})");
		ensure!(y_max <= max, "y_max ({y_max}) must be <= max ({max})");
		ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");

		Ok(TileBBox {
			level,
			max,
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}

	/// Creates a `TileBBox` covering the entire grid at the specified zoom
	/// level, i.e. all of `[0, 2^level) × [0, 2^level)`.
	///
	/// # Errors
	///
	/// Fails if the zoom level is out of range.
	pub fn new_full(level: u8) -> Result<TileBBox> {
		ensure!(
			level <= MAX_ZOOM_LEVEL,
			"level ({level}) must be <= {MAX_ZOOM_LEVEL}"
		);
		let max = 2u64.pow(u32::from(level)) - 1;
		Self::new(level, 0, 0, max, max)
	}

	/// Determines if the bounding box is empty.
	pub fn is_empty(&self) -> bool {
		(self.x_max < self.x_min) || (self.y_max < self.y_min)
	}

	/// Determines if the bounding box covers the entire grid at its level.
	pub fn is_full(&self) -> bool {
		(self.x_min == 0) && (self.y_min == 0) && (self.x_max == self.max) && (self.y_max == self.max)
	}

	/// Width (in tiles) of the bounding box, `0` if empty.
	pub fn width(&self) -> u64 {
		if self.x_max < self.x_min {
			0
		} else {
			self.x_max - self.x_min + 1
		}
	}

	/// Height (in tiles) of the bounding box, `0` if empty.
	pub fn height(&self) -> u64 {
		if self.y_max < self.y_min {
			0
		} else {
			self.y_max - self.y_min + 1
		}
	}

	/// Counts the total number of tiles within the bounding box.
	///
	/// Returns `u128` because a full grid at high zoom levels (4^level tiles)
	/// exceeds the `u64` range. Computed with integer arithmetic only.
	pub fn count_tiles(&self) -> u128 {
		u128::from(self.width()) * u128::from(self.height())
	}

	/// Returns an iterator over all tile coordinates within the bounding box.
	///
	/// The iteration is in row-major order (y outer, x inner), deterministic
	/// and reproducible. The sequence is produced lazily.
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord3> + '_ {
		let y_range = self.y_min..=self.y_max;
		let x_range = self.x_min..=self.x_max;
		let level = self.level;
		y_range
			.cartesian_product(x_range)
			.map(move |(y, x)| TileCoord3 { x, y, level })
	}

	/// Consumes the bounding box and returns an iterator over all tile
	/// coordinates within it, in row-major order.
	pub fn into_iter_coords(self) -> impl Iterator<Item = TileCoord3> {
		let y_range = self.y_min..=self.y_max;
		let x_range = self.x_min..=self.x_max;
		let level = self.level;
		y_range
			.cartesian_product(x_range)
			.map(move |(y, x)| TileCoord3 { x, y, level })
	}
}

impl Debug for TileBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: [{},{},{},{}] ({})",
			self.level,
			self.x_min,
			self.y_min,
			self.x_max,
			self.y_max,
			self.count_tiles()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	#[test]
	fn new_full_covers_whole_grid() {
		let bbox = TileBBox::new_full(4).unwrap();
		assert_eq!(bbox, TileBBox::new(4, 0, 0, 15, 15).unwrap());
		assert!(bbox.is_full());
		assert!(!bbox.is_empty());
	}

	#[test]
	fn new_rejects_invalid_ranges() {
		assert!(TileBBox::new(2, 3, 0, 1, 1).is_err());
		assert!(TileBBox::new(2, 0, 3, 1, 1).is_err());
		assert!(TileBBox::new(2, 0, 0, 4, 1).is_err());
		assert!(TileBBox::new(2, 0, 0, 1, 4).is_err());
	}

	#[test]
	fn new_full_rejects_oversized_level() {
		assert_eq!(
			TileBBox::new_full(64).unwrap_err().to_string(),
			"level (64) must be <= 63"
		);
	}

	#[rstest]
	#[case(0, 1)]
	#[case(1, 4)]
	#[case(2, 16)]
	#[case(5, 1024)]
	fn count_tiles_is_4_pow_level(#[case] level: u8, #[case] count: u128) {
		assert_eq!(TileBBox::new_full(level).unwrap().count_tiles(), count);
	}

	#[test]
	fn count_tiles_is_lossless_at_high_levels() {
		// 4^40 does not fit into 64 bits of float mantissa territory either;
		// the count must come out of pure integer arithmetic.
		assert_eq!(TileBBox::new_full(40).unwrap().count_tiles(), 1u128 << 80);
		assert_eq!(TileBBox::new_full(63).unwrap().count_tiles(), 1u128 << 126);
	}

	#[test]
	fn iter_coords_level_0_yields_origin_only() {
		let coords: Vec<TileCoord3> = TileBBox::new_full(0).unwrap().iter_coords().collect();
		assert_eq!(coords, vec![TileCoord3::new(0, 0, 0).unwrap()]);
	}

	#[test]
	fn iter_coords_is_row_major() {
		let coords: Vec<TileCoord3> = TileBBox::new(1, 0, 0, 1, 1).unwrap().iter_coords().collect();
		assert_eq!(
			coords,
			vec![
				TileCoord3::new(1, 0, 0).unwrap(),
				TileCoord3::new(1, 1, 0).unwrap(),
				TileCoord3::new(1, 0, 1).unwrap(),
				TileCoord3::new(1, 1, 1).unwrap(),
			]
		);
	}

	#[test]
	fn iter_coords_covers_grid_exactly_once() {
		let bbox = TileBBox::new_full(2).unwrap();
		let coords: Vec<TileCoord3> = bbox.iter_coords().collect();
		assert_eq!(coords.len(), 16);

		let unique: HashSet<(u64, u64)> = coords.iter().map(|c| (c.x, c.y)).collect();
		assert_eq!(unique.len(), 16);
		for x in 0..4 {
			for y in 0..4 {
				assert!(unique.contains(&(x, y)));
			}
		}
		for coord in &coords {
			assert_eq!(coord.level, 2);
			assert!(coord.is_valid());
		}
	}

	#[test]
	fn iter_coords_is_deterministic() {
		let bbox = TileBBox::new_full(3).unwrap();
		let first: Vec<TileCoord3> = bbox.iter_coords().collect();
		let second: Vec<TileCoord3> = bbox.iter_coords().collect();
		assert_eq!(first, second);
	}

	#[test]
	fn into_iter_coords_matches_iter_coords() {
		let bbox = TileBBox::new_full(2).unwrap();
		let borrowed: Vec<TileCoord3> = bbox.iter_coords().collect();
		let owned: Vec<TileCoord3> = bbox.into_iter_coords().collect();
		assert_eq!(borrowed, owned);
	}

	#[test]
	fn width_and_height() {
		let bbox = TileBBox::new(4, 2, 3, 5, 9).unwrap();
		assert_eq!(bbox.width(), 4);
		assert_eq!(bbox.height(), 7);
		assert_eq!(bbox.count_tiles(), 28);
	}

	#[test]
	fn debug_format() {
		let bbox = TileBBox::new_full(2).unwrap();
		assert_eq!(format!("{bbox:?}"), "2: [0,0,3,3] (16)");
	}
}
