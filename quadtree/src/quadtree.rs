//! Build-once, query-many quad-tree over ranked points.
//!
//! Nodes are addressed by [`QuadKey`](crate::morton::QuadKey)s relative to the
//! tree's global bounds. A node is either a leaf holding copies of its points
//! or an internal node with up to four children in
//! [`QUADRANTS`](crate::morton::QUADRANTS) order.

mod api;
mod build;
mod config;
mod query_rect;
mod types;

pub use api::{NodeInfo, QuadTree};
pub use build::compute_bounds;
pub use config::Config;
pub use types::BuildStats;
