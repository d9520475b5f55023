//! Core types for the graph document.
//!
//! Nodes, pins and edges are plain serializable values. Snapshots share them
//! through `Arc`, so every type here is cheap to clone and never mutated in
//! place by a caller holding an older snapshot.

use crate::constants::DEFAULT_EDGE_COLOR;
use serde::{Deserialize, Serialize};

pub type NodeId = u64;
pub type PinId = u64;

// ============================================================================
// Geometry
// ============================================================================

/// A point in graph-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f32,
    pub y: f32,
}

impl GraphPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with inclusive bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    /// Zero-area rectangle at a point.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Normalized rectangle spanning two corners in any order.
    pub fn spanning(a: GraphPoint, b: GraphPoint) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::spanning(GraphPoint::new(x, y), GraphPoint::new(x + width, y + height))
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// True when both extents are zero (a click rather than a drag).
    pub fn is_point(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }

    /// Inclusive overlap test: touching edges count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

// ============================================================================
// Document Types
// ============================================================================

/// Which side of a node a pin sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinKind {
    Input,
    Output,
}

/// A connection point on a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: PinId,
    /// Owning node
    pub node: NodeId,
    /// Declared side; untyped pins connect to anything
    #[serde(default)]
    pub kind: Option<PinKind>,
    /// Vertical offset from the node's top edge, `None` until measured
    #[serde(default)]
    pub offset_y: Option<f32>,
    /// Measured pin height
    #[serde(default)]
    pub height: f32,
    /// Color applied to edges dragged out of this pin
    #[serde(default)]
    pub color: Option<String>,
}

impl Pin {
    pub fn new(id: PinId, node: NodeId) -> Self {
        Self {
            id,
            node,
            kind: None,
            offset_y: None,
            height: 0.0,
            color: None,
        }
    }

    pub fn input(id: PinId, node: NodeId) -> Self {
        Self {
            kind: Some(PinKind::Input),
            ..Self::new(id, node)
        }
    }

    pub fn output(id: PinId, node: NodeId) -> Self {
        Self {
            kind: Some(PinKind::Output),
            ..Self::new(id, node)
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_measured(&self) -> bool {
        self.offset_y.is_some()
    }

    /// Vertical center of the pin relative to its node. Unmeasured pins sit
    /// at the top edge.
    pub fn center_offset(&self) -> f32 {
        self.offset_y.unwrap_or(0.0) + self.height / 2.0
    }
}

/// A positioned, measured node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub label: String,
    pub x: f32,
    pub y: f32,
    /// Measured footprint
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    /// Smallest measured pin offset among this node's pins
    #[serde(default)]
    pub min_pin: f32,
    /// Pins in declaration order
    #[serde(default)]
    pub pins: Vec<PinId>,
    /// Set while a non-final move is in flight
    #[serde(skip)]
    pub dragging: bool,
}

impl Node {
    pub fn new(id: NodeId, x: f32, y: f32) -> Self {
        Self {
            id,
            label: String::new(),
            x,
            y,
            width: 0.0,
            height: 0.0,
            min_pin: 0.0,
            pins: Vec::new(),
            dragging: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Bounding box in content coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

/// A directed connection from an output pin to an input pin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub output: PinId,
    pub input: PinId,
    pub color: String,
}

impl Edge {
    pub fn new(from: NodeId, output: PinId, to: NodeId, input: PinId) -> Self {
        Self {
            from,
            to,
            output,
            input,
            color: DEFAULT_EDGE_COLOR.to_string(),
        }
    }

    /// Same endpoints, ignoring color.
    pub fn connects(&self, other: &Edge) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.output == other.output
            && self.input == other.input
    }
}

/// Origin of a connection drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRef {
    pub node: NodeId,
    pub pin: PinId,
}

impl PinRef {
    pub fn new(node: NodeId, pin: PinId) -> Self {
        Self { node, pin }
    }
}
