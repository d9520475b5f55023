//! Pointer gesture state machine.
//!
//! One enum holds the single in-flight pointer gesture. The idle state has
//! exactly one representation: there is no way to hold a pin, an origin node
//! or a selection rectangle without a button being down.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Pressed              (pointer down on canvas)
//! Idle -> Connecting           (pointer down on a pin widget)
//! Pressed -> Pressed           (move: grow rubber band, or pan)
//! Connecting -> Connecting     (move: drag line endpoint)
//!
//! Any -> Idle                  (pointer up, or drop on a pin)
//! ```

use super::pointer::ButtonMask;
use crate::types::{GraphPoint, NodeId, PinId, PinRef, Rect};
use serde::{Deserialize, Serialize};

/// The in-flight pointer gesture, in graph-local coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MouseState {
    /// No button down
    #[default]
    Idle,

    /// Button down on the canvas: box-select (primary only) or pan (anything else)
    Pressed {
        buttons: ButtonMask,
        /// Where the button went down
        anchor: GraphPoint,
        /// Latest pointer position
        x: f32,
        y: f32,
        /// Rubber band spanning anchor and latest position
        rect: Rect,
    },

    /// Dragging a new connection out of a pin
    Connecting {
        buttons: ButtonMask,
        /// Drag line endpoint
        x: f32,
        y: f32,
        origin: PinRef,
    },
}

impl MouseState {
    /// Start a canvas gesture. An empty mask stays idle.
    pub fn pressed(buttons: ButtonMask, x: f32, y: f32) -> Self {
        if buttons.is_empty() {
            return Self::Idle;
        }
        Self::Pressed {
            buttons,
            anchor: GraphPoint::new(x, y),
            x,
            y,
            rect: Rect::at(x, y),
        }
    }

    /// Pressed button mask; empty when idle.
    pub fn down(&self) -> ButtonMask {
        match self {
            Self::Idle => ButtonMask::NONE,
            Self::Pressed { buttons, .. } | Self::Connecting { buttons, .. } => *buttons,
        }
    }

    pub fn is_down(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn dragging_edge(&self) -> bool {
        matches!(self, Self::Connecting { .. })
    }

    /// True for a primary-only canvas press.
    pub fn is_box_selecting(&self) -> bool {
        matches!(self, Self::Pressed { buttons, .. } if buttons.is_primary_only())
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Pressed { buttons, .. } if !buttons.is_primary_only())
    }

    /// Latest pointer position while a gesture is in flight.
    pub fn position(&self) -> Option<GraphPoint> {
        match self {
            Self::Idle => None,
            Self::Pressed { x, y, .. } | Self::Connecting { x, y, .. } => {
                Some(GraphPoint::new(*x, *y))
            }
        }
    }

    /// Origin of the connection being dragged.
    pub fn origin(&self) -> Option<PinRef> {
        match self {
            Self::Connecting { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        self.origin().map(|origin| origin.node)
    }

    pub fn pin(&self) -> Option<PinId> {
        self.origin().map(|origin| origin.pin)
    }

    /// Rubber band rectangle of a canvas press.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Pressed { rect, .. } => Some(*rect),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
