//! Editor configuration.
//!
//! Loaded from JSON with every field optional, then optionally overridden
//! from the environment.

use crate::constants::{ENV_FRAME_INTERVAL_MS, ENV_SNAP_GRID, FALLBACK_FRAME_MS, TARGET_FRAME_MS};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Cadence of the fallback frame timer
    pub frame_interval_ms: u64,
    /// Leave Shift+context-menu to the host's native menu (debug escape hatch)
    pub native_context_menu_modifier: bool,
    /// Grid that final node moves snap to
    pub snap_grid: Option<f32>,
    /// Flushes slower than this are logged as warnings
    pub slow_flush_ms: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FALLBACK_FRAME_MS,
            native_context_menu_modifier: cfg!(debug_assertions),
            snap_grid: None,
            slow_flush_ms: TARGET_FRAME_MS,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading editor config");
        Self::from_json_str(&contents)
    }

    /// Apply `GRAPHBOARD_*` environment overrides.
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_FRAME_INTERVAL_MS) {
            self.frame_interval_ms = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_FRAME_INTERVAL_MS,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_SNAP_GRID) {
            self.snap_grid = match value.trim() {
                "" | "off" | "none" => None,
                grid => Some(grid.parse().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_SNAP_GRID,
                    value: value.clone(),
                })?),
            };
        }
        self.validate()
    }

    pub fn validate(self) -> ConfigResult<Self> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("frame_interval_ms must be positive".into()));
        }
        if let Some(grid) = self.snap_grid {
            if !(grid > 0.0) {
                return Err(ConfigError::Invalid(format!("snap_grid must be positive, got {grid}")));
            }
        }
        Ok(self)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Snap a position to the configured grid, if any.
    pub fn snap(&self, x: f32, y: f32) -> (f32, f32) {
        match self.snap_grid {
            Some(grid) => ((x / grid).round() * grid, (y / grid).round() * grid),
            None => (x, y),
        }
    }
}
