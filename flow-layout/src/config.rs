//! Flow configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};

/// Gap used when no configuration is given.
pub const DEFAULT_SPACING: f32 = 10.0;

/// Settings shared by every layout pass of one controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Gap between adjacent items on a line and between lines.
    pub spacing: f32,

    /// Whether updates after the first width resolution may animate.
    ///
    /// The first width resolution never animates, regardless of this flag.
    pub animate_changes: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            animate_changes: true,
        }
    }
}

impl FlowConfig {
    /// Set the spacing between items and lines.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Enable or disable animation of non-initial updates.
    pub fn animate_changes(mut self, animate: bool) -> Self {
        self.animate_changes = animate;
        self
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject spacing the engine cannot place with.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(FlowError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
