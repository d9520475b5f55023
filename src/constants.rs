//! Crate-wide constants.
//!
//! Centralizes timing and default values so the editor, the schedulers and
//! the configuration layer agree on them.

// ============================================================================
// Frame Timing
// ============================================================================

/// Fallback flush interval in milliseconds when no frame clock is available
pub const FALLBACK_FRAME_MS: u64 = 16;

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

// ============================================================================
// Pointer Buttons (bit values of the host's `buttons` mask)
// ============================================================================

/// Primary button (usually left)
pub const BUTTON_PRIMARY: u8 = 1;

/// Secondary button (usually right)
pub const BUTTON_SECONDARY: u8 = 2;

/// Auxiliary button (usually middle / wheel)
pub const BUTTON_AUXILIARY: u8 = 4;

// ============================================================================
// Defaults
// ============================================================================

/// Color of edges whose origin pin does not specify one
pub const DEFAULT_EDGE_COLOR: &str = "#ffffff";

/// Color used for the in-progress connection line
pub const DRAG_LINE_COLOR: &str = "#ffffff";

/// Default log filter used by `init_tracing` when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "graphboard=info";

// ============================================================================
// Environment Overrides
// ============================================================================

pub const ENV_FRAME_INTERVAL_MS: &str = "GRAPHBOARD_FRAME_INTERVAL_MS";

pub const ENV_SNAP_GRID: &str = "GRAPHBOARD_SNAP_GRID";
