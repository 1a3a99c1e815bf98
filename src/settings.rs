//! Snap preferences and the stateless [`Snapper`] that applies them.
//!
//! Settings are stored as a small JSON document. Fields missing from the
//! document take their default values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Guideline, Result, SnapResult, snap};

/// Snap threshold used when none is configured, in scene units
pub const DEFAULT_THRESHOLD: f64 = 8.0;

/// User preferences for object snapping
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Snap the cursor to other objects
    #[serde(alias = "snap_to_objects")]
    pub enabled: bool,
    /// Maximum (exclusive) distance at which a candidate pulls the cursor
    pub threshold: f64,
    /// Report guidelines for rendering
    #[serde(alias = "snap_lines_visible")]
    pub show_guidelines: bool,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self { enabled: true, threshold: DEFAULT_THRESHOLD, show_guidelines: true }
    }
}

impl SnapSettings {
    /// Parses settings from a JSON document.
    ///
    /// The editor's `snap_to_objects` and `snap_lines_visible` keys are
    /// accepted for `enabled` and `show_guidelines`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) when `json` is not a valid settings document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the settings as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the file cannot be read and
    /// [`Error::Json`](crate::Error::Json) when its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Self::from_json_str(&fs::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded snap settings");
        Ok(settings)
    }

    /// Reads settings from a JSON file, falling back to defaults when the
    /// file is missing or cannot be parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no snap settings file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not load snap settings, using defaults");
                Self::default()
            }
        }
    }

    /// Writes the settings to `path` as JSON, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        tracing::debug!(path = %path.display(), "saved snap settings");
        Ok(())
    }
}

/// Applies [`SnapSettings`] to [`snap()`] calls. Holds no per-call state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Snapper {
    settings: SnapSettings,
}

impl Snapper {
    /// Creates a snapper that applies `settings`
    pub fn new(settings: SnapSettings) -> Self {
        Self { settings }
    }

    /// Settings in effect
    pub fn settings(&self) -> &SnapSettings {
        &self.settings
    }

    /// Snaps with the configured threshold, or returns the cursor unchanged
    /// when snapping is disabled.
    pub fn snap(&self, boxes: &[BoundingBox], cursor_x: f64, cursor_y: f64) -> SnapResult {
        if !self.settings.enabled {
            tracing::trace!(cursor_x, cursor_y, "snapping disabled");
            return SnapResult::unsnapped(cursor_x, cursor_y);
        }
        snap(boxes, cursor_x, cursor_y, self.settings.threshold)
    }

    /// Guidelines to draw for `result`; empty when guidelines are hidden.
    pub fn visible_guidelines(&self, result: &SnapResult) -> Vec<Guideline> {
        if !self.settings.show_guidelines {
            return Vec::new();
        }
        result.guidelines().collect()
    }
}
