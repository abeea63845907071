//! Viewport capabilities consumed by the scroll controller.
//!
//! A viewport advertises what it can do through [`ViewportVariant`]. Hosts
//! implement the traits over their own viewport objects; the headless
//! implementations in this module keep state in memory and count render
//! requests instead of drawing.

mod headless;
mod stack;
mod volume;

pub use headless::HeadlessViewport;
pub use stack::StackViewportState;
pub use volume::{VolumeActor, VolumeViewportState};

use crate::core::{Camera, CameraUpdate, TargetVolume};

/// Capability view of a viewport for one scroll call.
pub enum ViewportVariant<'a> {
    /// Ordered frame stack navigated by index.
    Stack(&'a mut dyn StackNavigation),
    /// Volume navigated by moving the camera along the view-plane normal.
    Volume(&'a mut dyn VolumeNavigation),
    /// Any other viewport kind; scrolling it is a usage error.
    Unsupported { kind: &'a str },
}

impl ViewportVariant<'_> {
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Stack(_) => "stack",
            Self::Volume(_) => "volume",
            Self::Unsupported { kind } => kind,
        }
    }
}

pub trait Viewport {
    fn variant(&mut self) -> ViewportVariant<'_>;
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn variant(&mut self) -> ViewportVariant<'_> {
        (**self).variant()
    }
}

/// Index-based navigation over an ordered image stack.
pub trait StackNavigation {
    fn current_image_index(&self) -> usize;

    fn image_count(&self) -> usize;

    fn set_image_index(&mut self, index: usize);

    /// Requests a repaint; fire-and-forget.
    fn render(&mut self);
}

/// Camera-based navigation through one or more attached volumes.
pub trait VolumeNavigation {
    fn camera(&self) -> Camera;

    /// Commits a new focal point and eye position; orientation is unchanged.
    fn set_camera(&mut self, update: CameraUpdate);

    /// Resolves which attached volume a scroll targets, or `None` when
    /// `selector` names no attached volume (or nothing is attached).
    fn resolve_target_volume(
        &self,
        camera: &Camera,
        selector: Option<&str>,
    ) -> Option<TargetVolume>;

    /// Renderable actor for an attached volume, if the rendering side has one.
    fn actor(&self, volume_id: &str) -> Option<&VolumeActor>;

    /// Requests a repaint; fire-and-forget.
    fn render(&mut self);
}
