use super::types::{Node, NodeKind};
use crate::collision_detection::{contains_point, intersect};
use common::shapes::{Bounds, Point};

impl Node {
    pub(crate) fn visit_rect<F>(&self, query: &Bounds, f: &mut F)
    where
        F: FnMut(&Point),
    {
        if !intersect(query, &self.bounds) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf(points) => {
                // Node bounds only over-approximate, so every point is checked.
                for p in points.iter() {
                    if contains_point(p, query) {
                        f(p);
                    }
                }
            }
            NodeKind::Internal(children) => {
                for child in children.iter().flatten() {
                    child.visit_rect(query, f);
                }
            }
        }
    }
}
