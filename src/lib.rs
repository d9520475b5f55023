//! Interaction layer for node graph editors.
//!
//! Turns raw pointer events and asynchronous layout measurements into
//! immutable editor-state transitions:
//!
//! - `state` - snapshots and the pure transition contract
//! - `input` - pointer gesture state machine and event handlers
//! - `batch` - frame-batched measurement queue
//! - `editor` - the controller that owns the current snapshot and notifies observers
//! - `frame` - frame clocks that run batched flushes
//!
//! Rendering is left to the host: subscribe to the editor and draw each
//! snapshot it hands you.

pub mod batch;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod frame;
pub mod input;
pub mod logging;
pub mod perf;
pub mod spatial_index;
pub mod state;
pub mod types;

pub use batch::{BatchQueue, BatchedAction};
pub use config::EditorConfig;
pub use editor::{GraphEditor, MeasureSink, PendingFlush, SubscriptionId};
pub use error::{ConfigError, ConfigResult};
pub use frame::{FallbackTimer, FrameScheduler, ManualFrameClock};
pub use input::{ButtonMask, Modifiers, MouseState, PointerEvent, PointerTarget};
pub use state::{DragOverlay, EditorState, GraphState, MenuState, Viewport};
pub use types::{Edge, GraphPoint, Node, NodeId, Pin, PinId, PinKind, PinRef, Rect};
