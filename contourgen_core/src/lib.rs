//! Core coordinate types for the contourgen batch orchestrator.
//!
//! Contains tile coordinates and bounding boxes for enumerating quadtree
//! grids at a given zoom level.

pub mod types;

pub use types::*;
