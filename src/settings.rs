//! Grid settings: slot shape, gesture thresholds, layout, log level.
//!
//! Stored as JSON. Every field has a default, so a partial or missing file
//! still yields a usable configuration.

use crate::blocks::BlockLayout;
use crate::column::GestureThresholds;
use crate::constants::{
    COLUMN_WIDTH, DEFAULT_END_HOUR, DEFAULT_GRANULARITY_MINUTES, DEFAULT_LOG_LEVEL,
    DEFAULT_START_HOUR, GHOST_MS, HOLD_MS, MOVE_PX, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
    SLOT_HEIGHT,
};
use crate::error::{GridError, Result};
use crate::hit_test::GridGeometry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub granularity_minutes: u16,
    pub start_hour: u8,
    pub end_hour: u8,
    /// Touch hold before range selection, in milliseconds
    pub hold_ms: u64,
    /// Pending-touch travel that means scroll, in pixels
    pub move_px: f32,
    /// Synthetic mouse suppression after touch, in milliseconds
    pub ghost_ms: u64,
    pub slot_height: f32,
    pub column_width: f32,
    /// One of "trace", "debug", "info", "warn", "error"
    pub log_level: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            hold_ms: HOLD_MS,
            move_px: MOVE_PX,
            ghost_ms: GHOST_MS,
            slot_height: SLOT_HEIGHT,
            column_width: COLUMN_WIDTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GridSettings {
    /// Check everything a grid needs to be constructible.
    pub fn validate(&self) -> Result<()> {
        self.block_layout()?;

        let positive = [
            ("move_px", self.move_px),
            ("slot_height", self.slot_height),
            ("column_width", self.column_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GridError::InvalidThreshold {
                    name,
                    value: f64::from(value),
                });
            }
        }
        if self.hold_ms == 0 {
            return Err(GridError::InvalidThreshold {
                name: "hold_ms",
                value: 0.0,
            });
        }
        Ok(())
    }

    pub fn block_layout(&self) -> Result<BlockLayout> {
        BlockLayout::new(self.granularity_minutes, self.start_hour, self.end_hour)
    }

    pub fn thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            hold: Duration::from_millis(self.hold_ms),
            move_px: self.move_px,
        }
    }

    pub fn ghost_window(&self) -> Duration {
        Duration::from_millis(self.ghost_ms)
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            column_width: self.column_width,
            slot_height: self.slot_height,
            ..GridGeometry::default()
        }
    }

    /// Load and validate; a missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: GridSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load from the platform settings path, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "settings unreadable, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// `<config dir>/slotgrid/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
