use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::viewport::{StackNavigation, Viewport, ViewportVariant};

/// In-memory stack viewport: frame ids, current index, render request count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackViewportState {
    image_ids: Vec<String>,
    current_index: usize,
    #[serde(skip)]
    render_requests: usize,
}

impl StackViewportState {
    #[must_use]
    pub fn new(image_ids: Vec<String>) -> Self {
        Self {
            image_ids,
            current_index: 0,
            render_requests: 0,
        }
    }

    /// Stack of `count` synthetic frame ids `frame-0`, `frame-1`, ...
    #[must_use]
    pub fn with_frame_count(count: usize) -> Self {
        Self::new((0..count).map(|i| format!("frame-{i}")).collect())
    }

    /// Starts the stack at `index`; must address an existing frame.
    pub fn with_current_index(mut self, index: usize) -> NavResult<Self> {
        if index >= self.image_ids.len() {
            return Err(NavError::InvalidData(format!(
                "image index {index} out of range for {} frames",
                self.image_ids.len()
            )));
        }
        self.current_index = index;
        Ok(self)
    }

    #[must_use]
    pub fn image_ids(&self) -> &[String] {
        &self.image_ids
    }

    #[must_use]
    pub fn current_image_id(&self) -> Option<&str> {
        self.image_ids.get(self.current_index).map(String::as_str)
    }

    #[must_use]
    pub fn render_requests(&self) -> usize {
        self.render_requests
    }
}

impl StackNavigation for StackViewportState {
    fn current_image_index(&self) -> usize {
        self.current_index
    }

    fn image_count(&self) -> usize {
        self.image_ids.len()
    }

    fn set_image_index(&mut self, index: usize) {
        self.current_index = index.min(self.image_ids.len().saturating_sub(1));
    }

    fn render(&mut self) {
        self.render_requests += 1;
    }
}

impl Viewport for StackViewportState {
    fn variant(&mut self) -> ViewportVariant<'_> {
        ViewportVariant::Stack(self)
    }
}
