use super::api::NodeInfo;
use crate::morton::QuadKey;
use common::shapes::{Bounds, Point};

pub(crate) struct Node {
    pub(crate) key: QuadKey,
    // Cell bounds widened to cover every point stored below this node.
    pub(crate) bounds: Bounds,
    pub(crate) kind: NodeKind,
}

pub(crate) enum NodeKind {
    Internal([Option<Box<Node>>; 4]),
    Leaf(Box<[Point]>),
}

impl Node {
    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    #[inline(always)]
    pub(crate) fn points(&self) -> &[Point] {
        match &self.kind {
            NodeKind::Leaf(points) => &points[..],
            NodeKind::Internal(_) => &[],
        }
    }

    pub(crate) fn visit_nodes<F>(&self, depth: u8, f: &mut F)
    where
        F: FnMut(&NodeInfo),
    {
        f(&NodeInfo {
            key: self.key,
            depth,
            bounds: self.bounds,
            len: self.points().len(),
            is_leaf: self.is_leaf(),
        });
        if let NodeKind::Internal(children) = &self.kind {
            for child in children.iter().flatten() {
                child.visit_nodes(depth + 1, f);
            }
        }
    }
}

/// Shape of a finished tree, gathered while it was built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub points: usize,
    pub nodes: usize,
    pub leaves: usize,
    pub depth: u8,
}

impl BuildStats {
    pub(crate) fn leaf(depth: u8, points: usize) -> Self {
        BuildStats {
            points,
            nodes: 1,
            leaves: 1,
            depth,
        }
    }

    pub(crate) fn internal(depth: u8) -> Self {
        BuildStats {
            points: 0,
            nodes: 1,
            leaves: 0,
            depth,
        }
    }

    pub(crate) fn merge(&mut self, other: &BuildStats) {
        self.points += other.points;
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.depth = self.depth.max(other.depth);
    }
}
