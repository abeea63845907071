use serde::{Deserialize, Serialize};

use crate::core::SliceSnapMode;
use crate::error::{NavError, NavResult};

/// Scroll controller configuration.
///
/// Serializable so host applications can persist navigation preferences next
/// to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollControllerConfig {
    /// Global inversion preference, combined with each call's `invert` flag
    /// by exclusive-or.
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub snap_mode: SliceSnapMode,
}

impl ScrollControllerConfig {
    #[must_use]
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[must_use]
    pub fn with_snap_mode(mut self, snap_mode: SliceSnapMode) -> Self {
        self.snap_mode = snap_mode;
        self
    }

    /// Parses a JSON config; missing fields take defaults.
    pub fn from_json_str(input: &str) -> NavResult<Self> {
        serde_json::from_str(input).map_err(|err| {
            NavError::InvalidData(format!("failed to parse scroll controller config: {err}"))
        })
    }

    pub fn to_json_string(&self) -> NavResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            NavError::InvalidData(format!(
                "failed to serialize scroll controller config: {err}"
            ))
        })
    }
}
