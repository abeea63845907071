use std::fmt;

use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// Identifier of the UI element a viewport is mounted on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Normalized wheel or drag input for one viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollEvent {
    pub element: ElementId,
    pub delta_frames: i64,
    #[serde(default)]
    pub volume_id: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

impl ScrollEvent {
    #[must_use]
    pub fn new(element: impl Into<ElementId>, delta_frames: i64) -> Self {
        Self {
            element: element.into(),
            delta_frames,
            volume_id: None,
            invert: false,
        }
    }

    #[must_use]
    pub fn with_volume_id(mut self, volume_id: impl Into<String>) -> Self {
        self.volume_id = Some(volume_id.into());
        self
    }

    #[must_use]
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

/// Maps UI elements to the viewports mounted on them.
pub trait ViewportResolver {
    fn resolve_viewport(&mut self, element: &ElementId) -> Option<&mut dyn Viewport>;
}
