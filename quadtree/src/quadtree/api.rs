use super::config::Config;
use super::types::{BuildStats, Node};
use crate::morton::QuadKey;
use common::shapes::{Bounds, Point, Rect};
use tracing::trace;

// Immutable once built; shared between threads without locking.
pub struct QuadTree {
    pub(super) root: Option<Box<Node>>,
    pub(super) global_bounds: Bounds,
    pub(super) stats: BuildStats,
    pub(super) config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeInfo {
    pub key: QuadKey,
    pub depth: u8,
    pub bounds: Bounds,
    pub len: usize,
    pub is_leaf: bool,
}

impl QuadTree {
    pub(super) fn empty(config: Config) -> Self {
        QuadTree {
            root: None,
            global_bounds: Bounds::default(),
            stats: BuildStats::default(),
            config,
        }
    }

    pub fn global_bounds(&self) -> Bounds {
        self.global_bounds
    }

    pub fn point_count(&self) -> usize {
        self.stats.points
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Edges included. Report order is unspecified.
    pub fn query<F>(&self, rect: &Rect, f: F)
    where
        F: FnMut(&Point),
    {
        self.query_bounds(&Bounds::from(*rect), f);
    }

    pub fn query_bounds<F>(&self, rect: &Bounds, mut f: F)
    where
        F: FnMut(&Point),
    {
        if let Some(root) = &self.root {
            root.visit_rect(rect, &mut f);
        }
    }

    pub fn points_in_rect(&self, rect: &Rect, points: &mut Vec<Point>) {
        self.query(rect, |p| points.push(*p));
    }

    // Pre-order, children in quadrant order.
    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&NodeInfo),
    {
        if let Some(root) = &self.root {
            root.visit_nodes(0, &mut f);
        }
    }

    pub fn log_tree(&self) {
        self.for_each_node(|node| {
            trace!(
                key = node.key,
                depth = node.depth,
                bounds = %node.bounds,
                points = node.len,
                leaf = node.is_leaf,
                "quadtree node"
            );
        });
    }
}
