use super::config::Config;
use super::types::{BuildStats, Node, NodeKind};
use super::QuadTree;
use crate::error::QuadtreeResult;
use crate::morton::{self, Quadrant, QuadKey, MAX_DEPTH, QUADRANTS};
use common::shapes::{Bounds, Point};
use tracing::debug;

/// Smallest box around `points` with its corners rounded out to whole units.
pub fn compute_bounds(points: &[Point]) -> Option<Bounds> {
    Bounds::from_points(points).map(|bounds| bounds.round_out())
}

impl QuadTree {
    pub fn build(points: &[Point]) -> QuadtreeResult<Self> {
        Self::build_with_config(points, Config::default())
    }

    // An empty slice gives an empty tree. Non-finite extents fail with
    // DomainTooLarge.
    pub fn build_with_config(points: &[Point], config: Config) -> QuadtreeResult<Self> {
        let Some(global_bounds) = compute_bounds(points) else {
            debug!("quadtree built from an empty point set");
            return Ok(QuadTree::empty(config));
        };

        let builder = Builder {
            global_bounds,
            max_block_size: config.max_block_size.max(1),
        };
        let (root, stats) = builder.build_node(morton::min_id(0), 0, points.to_vec())?;
        debug_assert_eq!(stats.points, points.len());
        debug!(
            points = stats.points,
            nodes = stats.nodes,
            leaves = stats.leaves,
            depth = stats.depth,
            bounds = %global_bounds,
            "quadtree built"
        );

        Ok(QuadTree {
            root: Some(Box::new(root)),
            global_bounds,
            stats,
            config,
        })
    }
}

struct Builder {
    global_bounds: Bounds,
    max_block_size: usize,
}

impl Builder {
    fn build_node(
        &self,
        key: QuadKey,
        depth: u8,
        points: Vec<Point>,
    ) -> QuadtreeResult<(Node, BuildStats)> {
        let mut bounds = morton::compute_bounds_for_quad_key(key, &self.global_bounds)?;
        if let Some(tight) = Bounds::from_points(&points) {
            bounds.expand_to_include(&tight);
        }

        if points.len() <= self.max_block_size || depth == MAX_DEPTH {
            let stats = BuildStats::leaf(depth, points.len());
            let node = Node {
                key,
                bounds,
                kind: NodeKind::Leaf(points.into_boxed_slice()),
            };
            return Ok((node, stats));
        }

        let child_keys = morton::compute_children(key)?;
        let buckets = self.bucket(&points, key, depth + 1)?;
        drop(points);

        let mut children: [Option<Box<Node>>; 4] = Default::default();
        let mut stats = BuildStats::internal(depth);
        for (quadrant, bucket) in QUADRANTS.into_iter().zip(buckets) {
            if bucket.is_empty() {
                continue;
            }
            let (child, child_stats) =
                self.build_node(child_keys[quadrant.index()], depth + 1, bucket)?;
            stats.merge(&child_stats);
            children[quadrant.index()] = Some(Box::new(child));
        }

        let node = Node {
            key,
            bounds,
            kind: NodeKind::Internal(children),
        };
        Ok((node, stats))
    }

    fn bucket(
        &self,
        points: &[Point],
        parent: QuadKey,
        depth: u8,
    ) -> QuadtreeResult<[Vec<Point>; 4]> {
        let mut buckets: [Vec<Point>; 4] = Default::default();
        for bucket in buckets.iter_mut() {
            bucket.reserve(points.len() / 4);
        }
        for p in points {
            let key = morton::compute_quad_key(p, depth, &self.global_bounds)?;
            debug_assert_eq!(key >> 2, parent, "point {p} left its parent cell");
            buckets[Quadrant::of_key(key).index()].push(*p);
        }
        Ok(buckets)
    }
}
