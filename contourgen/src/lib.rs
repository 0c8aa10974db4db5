//! Batch orchestrator for contour tile generation.
//!
//! Enumerates every tile coordinate of a quadtree grid at the configured
//! output zoom level and fans each tile out to an external per-tile worker
//! process, with bounded concurrency. The per-tile transformation itself
//! (reading the source DEM, extracting contours, writing tiles) lives in the
//! worker program; this crate only drives it.

pub mod config;
pub mod orchestrator;
pub mod pool;
pub mod worker;

pub use config::{BatchConfig, SourceEncoding};
pub use pool::{DispatchPool, DispatchSummary};
pub use worker::{CommandWorker, TileWorker, WorkUnit};
