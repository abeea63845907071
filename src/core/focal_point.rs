use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::validation::{finite_point, positive_spacing, unit_direction};
use crate::core::{CameraUpdate, SliceRange};
use crate::error::{NavError, NavResult};

/// Largest allowed deviation of `normal · range.normal()` from 1.
const NORMAL_ALIGNMENT_EPSILON: f64 = 1e-9;

/// How a scroll step is turned into a focal-point move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceSnapMode {
    /// Move exactly `spacing * delta` along the normal, then clamp.
    #[default]
    Continuous,
    /// Round to the nearest slice of the lattice `min + k * spacing`, step
    /// `delta` slices, then clamp to the first/last slice.
    SliceGrid,
}

/// Computes the camera after scrolling `delta` slices of `spacing` along
/// `normal`.
///
/// The new focal point always projects into `[range.min(), range.max()]`; its
/// component orthogonal to the range normal is left as the unclamped move
/// produced it (steps longer than the range itself are shortened to it
/// first). The eye position receives the same translation as the focal
/// point, so camera distance and orientation are preserved.
///
/// `normal` must point the same way as `range.normal()`; a range computed for
/// another orientation is rejected with [`NavError::InvalidData`].
pub fn snap_focal_point(
    focal_point: DVec3,
    position: DVec3,
    range: &SliceRange,
    normal: DVec3,
    spacing: f64,
    delta: i64,
    mode: SliceSnapMode,
) -> NavResult<CameraUpdate> {
    let focal_point = finite_point(focal_point, "focal point")?;
    let position = finite_point(position, "camera position")?;
    let normal = unit_direction(normal, "view plane normal")?;
    let spacing = positive_spacing(spacing, "spacing in normal direction")?;
    if normal.dot(range.normal()) < 1.0 - NORMAL_ALIGNMENT_EPSILON {
        return Err(NavError::InvalidData(
            "view plane normal must match the slice range normal".to_owned(),
        ));
    }

    let step = match mode {
        SliceSnapMode::Continuous => spacing * delta as f64,
        SliceSnapMode::SliceGrid => slice_grid_step(focal_point, range, spacing, delta),
    };
    // Longer steps land on the same edge; bounding them keeps precision for huge deltas.
    let current = range.project(focal_point);
    let reach = range.span() + (current - range.clamp(current)).abs();
    let step = step.clamp(-reach, reach);

    let candidate = focal_point + range.normal() * step;
    let new_focal_point = range.clamp_point(candidate);

    Ok(CameraUpdate {
        focal_point: new_focal_point,
        position: position + (new_focal_point - focal_point),
    })
}

/// Signed distance from the current focal point to the target lattice slice.
fn slice_grid_step(focal_point: DVec3, range: &SliceRange, spacing: f64, delta: i64) -> f64 {
    let span = range.span();
    let steps = (span / spacing).round();
    let current = range.project(focal_point);
    let fraction = if span > 0.0 {
        (current - range.min()) / span
    } else {
        0.0
    };

    let slice_index = ((fraction * steps).round() + delta as f64).clamp(0.0, steps);
    let target = (range.min() + slice_index * spacing).min(range.max());
    target - current
}
