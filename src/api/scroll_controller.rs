use tracing::{debug, trace, warn};

use crate::core::{Camera, CameraUpdate, next_index, slice_range, snap_focal_point};
use crate::error::{NavError, NavResult};
use crate::viewport::{StackNavigation, Viewport, ViewportVariant, VolumeNavigation};

use super::{ScrollControllerConfig, ScrollEvent, ViewportResolver};

/// Why a scroll finished without touching the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Stack viewport without frames.
    EmptyStack,
    /// No attached volume matched the selector (or none is attached).
    TargetVolumeNotFound { selector: Option<String> },
    /// The volume resolved but the renderer has no actor for it.
    MissingActor { volume_id: String },
}

/// Result of a scroll call.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollOutcome {
    /// Stack index moved and a render was requested.
    Index { from: usize, to: usize },
    /// Camera moved through `volume_id` and a render was requested.
    Camera {
        volume_id: String,
        previous: Camera,
        update: CameraUpdate,
    },
    /// Nothing to do: zero delta, or a stack index already at its bound.
    Unchanged,
    Skipped(SkipReason),
}

impl ScrollOutcome {
    /// `true` when viewport state was mutated and a render requested.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Index { .. } | Self::Camera { .. })
    }
}

/// Turns signed frame deltas into stack index changes or camera moves.
///
/// The controller holds only configuration; every call borrows the target
/// viewport for its duration and leaves no state behind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollController {
    config: ScrollControllerConfig,
}

impl ScrollController {
    #[must_use]
    pub fn new(config: ScrollControllerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> ScrollControllerConfig {
        self.config
    }

    /// Scrolls `target` by `delta_frames` frames; frames increase along the
    /// view direction.
    ///
    /// `invert` flips the delta (combined with the configured preference).
    /// `volume_selector` picks one of several volumes in a volume viewport;
    /// `None` scrolls through the volume with the finest slice spacing.
    ///
    /// Fails with [`NavError::UnsupportedViewport`] when the viewport is
    /// neither a stack nor a volume viewport, before any mutation.
    pub fn scroll(
        &self,
        target: &mut dyn Viewport,
        delta_frames: i64,
        volume_selector: Option<&str>,
        invert: bool,
    ) -> NavResult<ScrollOutcome> {
        let delta = self.effective_delta(delta_frames, invert);

        let variant = target.variant();
        trace!(viewport = variant.kind(), delta, "dispatching scroll");

        match variant {
            ViewportVariant::Stack(stack) => Ok(scroll_stack(stack, delta)),
            ViewportVariant::Volume(volume) => self.scroll_volume(volume, delta, volume_selector),
            unsupported @ ViewportVariant::Unsupported { .. } => {
                Err(NavError::UnsupportedViewport {
                    kind: unsupported.kind().to_owned(),
                })
            }
        }
    }

    /// Resolves the event's element to its viewport and scrolls it.
    pub fn handle_event<R>(
        &self,
        resolver: &mut R,
        event: &ScrollEvent,
    ) -> NavResult<ScrollOutcome>
    where
        R: ViewportResolver + ?Sized,
    {
        let viewport = resolver
            .resolve_viewport(&event.element)
            .ok_or_else(|| NavError::UnknownElement(event.element.to_string()))?;
        self.scroll(
            viewport,
            event.delta_frames,
            event.volume_id.as_deref(),
            event.invert,
        )
    }

    fn effective_delta(&self, delta_frames: i64, invert: bool) -> i64 {
        if invert != self.config.invert {
            delta_frames.saturating_neg()
        } else {
            delta_frames
        }
    }

    fn scroll_volume(
        &self,
        volume: &mut dyn VolumeNavigation,
        delta: i64,
        volume_selector: Option<&str>,
    ) -> NavResult<ScrollOutcome> {
        if delta == 0 {
            return Ok(ScrollOutcome::Unchanged);
        }

        let camera = volume.camera();
        let Some(target) = volume.resolve_target_volume(&camera, volume_selector) else {
            trace!(selector = ?volume_selector, "no target volume for scroll");
            return Ok(ScrollOutcome::Skipped(SkipReason::TargetVolumeNotFound {
                selector: volume_selector.map(str::to_owned),
            }));
        };

        let Some(actor) = volume.actor(&target.volume_id) else {
            warn!(
                volume_id = %target.volume_id,
                "no actor found for target volume, skipping scroll"
            );
            return Ok(ScrollOutcome::Skipped(SkipReason::MissingActor {
                volume_id: target.volume_id,
            }));
        };

        let range = slice_range(&actor.geometry, camera.view_plane_normal, camera.focal_point)?;
        let update = snap_focal_point(
            camera.focal_point,
            camera.position,
            &range,
            camera.view_plane_normal,
            target.spacing_in_normal_direction,
            delta,
            self.config.snap_mode,
        )?;

        // Committed even when pinned at a range edge.
        let moved = update.translation_from(&camera).length();
        volume.set_camera(update);
        volume.render();
        debug!(
            volume_id = %target.volume_id,
            delta,
            spacing = target.spacing_in_normal_direction,
            range_min = range.min(),
            range_max = range.max(),
            moved,
            "scrolled volume viewport"
        );

        Ok(ScrollOutcome::Camera {
            volume_id: target.volume_id,
            previous: camera,
            update,
        })
    }
}

fn scroll_stack(stack: &mut dyn StackNavigation, delta: i64) -> ScrollOutcome {
    if delta == 0 {
        return ScrollOutcome::Unchanged;
    }

    let from = stack.current_image_index();
    let Some(to) = next_index(from, stack.image_count(), delta) else {
        trace!("scroll on empty stack");
        return ScrollOutcome::Skipped(SkipReason::EmptyStack);
    };
    if to == from {
        return ScrollOutcome::Unchanged;
    }

    stack.set_image_index(to);
    stack.render();
    debug!(from, to, delta, "scrolled stack viewport");
    ScrollOutcome::Index { from, to }
}
