//! Contains tile coordinate and bounding box types.

mod tile_bbox;
pub use tile_bbox::*;

mod tile_coord3;
pub use tile_coord3::*;
