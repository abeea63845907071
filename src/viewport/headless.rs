use crate::viewport::{StackViewportState, Viewport, ViewportVariant, VolumeViewportState};

/// Either headless viewport kind, for registries holding both.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessViewport {
    Stack(StackViewportState),
    Volume(VolumeViewportState),
}

impl HeadlessViewport {
    #[must_use]
    pub fn as_stack(&self) -> Option<&StackViewportState> {
        match self {
            Self::Stack(stack) => Some(stack),
            Self::Volume(_) => None,
        }
    }

    #[must_use]
    pub fn as_volume(&self) -> Option<&VolumeViewportState> {
        match self {
            Self::Volume(volume) => Some(volume),
            Self::Stack(_) => None,
        }
    }

    #[must_use]
    pub fn render_requests(&self) -> usize {
        match self {
            Self::Stack(stack) => stack.render_requests(),
            Self::Volume(volume) => volume.render_requests(),
        }
    }
}

impl From<StackViewportState> for HeadlessViewport {
    fn from(stack: StackViewportState) -> Self {
        Self::Stack(stack)
    }
}

impl From<VolumeViewportState> for HeadlessViewport {
    fn from(volume: VolumeViewportState) -> Self {
        Self::Volume(volume)
    }
}

impl Viewport for HeadlessViewport {
    fn variant(&mut self) -> ViewportVariant<'_> {
        match self {
            Self::Stack(stack) => stack.variant(),
            Self::Volume(volume) => volume.variant(),
        }
    }
}
