//! Ranked point search: the `count` lowest ranked points inside a rectangle.
//!
//! A [`SearchContext`] owns a Morton keyed quadtree over a copy of the input
//! points. Each search walks the nodes that overlap the query rectangle and
//! feeds every contained point through a [`RankedSelector`].

pub mod selector;

pub use common::shapes::{Bounds, Point, Rect};
pub use quadtree::quadtree::Config;
pub use quadtree::{QuadtreeError, QuadtreeResult};
pub use selector::RankedSelector;

use quadtree::quadtree::QuadTree;
use tracing::{debug, trace, Level};

pub struct SearchContext {
    tree: QuadTree,
}

impl SearchContext {
    pub fn create(points: &[Point]) -> QuadtreeResult<Self> {
        Self::create_with_config(points, Config::default())
    }

    pub fn create_with_config(points: &[Point], config: Config) -> QuadtreeResult<Self> {
        let tree = QuadTree::build_with_config(points, config)?;
        let stats = tree.stats();
        debug!(
            points = stats.points,
            leaves = stats.leaves,
            bounds = %tree.global_bounds(),
            "search context created"
        );
        if tracing::enabled!(Level::TRACE) {
            tree.log_tree();
        }
        Ok(SearchContext { tree })
    }

    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    pub fn point_count(&self) -> usize {
        self.tree.point_count()
    }

    /// Returns up to `count` points inside `rect` (edges included), sorted
    /// ascending by rank. A `count` of zero or less yields nothing.
    pub fn search(&self, rect: Rect, count: i32) -> Vec<Point> {
        let Ok(count) = usize::try_from(count) else {
            return Vec::new();
        };
        // No search can return more points than the context holds.
        let mut out = vec![Point::default(); count.min(self.tree.point_count())];
        let found = self.search_into(rect, &mut out);
        out.truncate(found);
        out
    }

    // Slots of `out` past the returned length are unspecified.
    pub fn search_into(&self, rect: Rect, out: &mut [Point]) -> usize {
        if out.is_empty() {
            return 0;
        }

        let capacity = out.len();
        let mut selector = RankedSelector::new(out);
        self.tree.query(&rect, |p| {
            selector.offer(p);
        });
        let found = selector.into_len();
        trace!(%rect, count = capacity, found, "search complete");
        found
    }

    pub fn destroy(self) {
        debug!(points = self.tree.point_count(), "search context destroyed");
    }
}
