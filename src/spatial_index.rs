//! Spatial Index Module
//!
//! R-tree over node bounding boxes. Box-select and point hit testing go
//! through here instead of scanning every node.

use crate::types::{Node, NodeId, Rect};
use rstar::{AABB, RTree, RTreeObject};

/// A node's bounding box in content coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn for_node(node: &Node) -> Self {
        Self {
            node_id: node.id,
            bounds: node.bounds(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.bounds.min_x
            && x <= self.bounds.max_x
            && y >= self.bounds.min_y
            && y <= self.bounds.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Read-only index built from one snapshot's nodes.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn from_nodes<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let entries: Vec<SpatialEntry> = nodes.into_iter().map(SpatialEntry::for_node).collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Nodes whose box contains the point. Boundaries count.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.node_id)
            .collect()
    }

    /// Nodes whose box overlaps the rectangle. Touching edges count.
    pub fn query_rect(&self, rect: &Rect) -> Vec<NodeId> {
        let envelope = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.intersects(rect))
            .map(|entry| entry.node_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
