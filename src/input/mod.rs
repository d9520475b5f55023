//! Pointer input handling for the graph canvas.
//!
//! This module implements the pointer interaction state machine: which
//! gesture is in progress and which transition each raw event triggers.
//!
//! ## Architecture
//!
//! The in-flight gesture lives in the snapshot as an explicit state machine
//! (`MouseState`). Handlers on `GraphEditor` map events to graph
//! coordinates, pick the transition and commit it. Node drags and clicks
//! come straight from node widgets and never touch `MouseState`.
//!
//! ## Modules
//!
//! - `pointer` - raw event types (buttons, modifiers, target)
//! - `state` - gesture state machine enum and helper methods
//! - `coords` - client to graph coordinate conversion
//! - `mouse_down` - canvas and pin pointer-down, context menu
//! - `drag` - pointer move and node drag
//! - `mouse_up` - canvas and pin pointer-up, node click

mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod pointer;
mod state;

pub use coords::CoordinateConverter;
pub use pointer::{ButtonMask, Modifiers, PointerEvent, PointerTarget};
pub use state::MouseState;
