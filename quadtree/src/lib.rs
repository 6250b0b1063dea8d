pub mod collision_detection;
pub mod error;
pub mod morton;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
