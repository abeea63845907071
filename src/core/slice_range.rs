use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::VolumeGeometry;
use crate::core::validation::{finite_point, unit_direction};
use crate::error::{NavError, NavResult};

/// Interval along `normal`, measured from `origin`, inside which a focal
/// point stays within a volume.
///
/// Valid only for the orientation it was computed with; rebuild it whenever
/// the view-plane normal changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceRange {
    min: f64,
    max: f64,
    origin: DVec3,
    normal: DVec3,
}

impl SliceRange {
    /// Creates a range; bounds given in reverse order are swapped.
    pub fn new(min: f64, max: f64, origin: DVec3, normal: DVec3) -> NavResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(NavError::InvalidData(
                "slice range bounds must be finite".to_owned(),
            ));
        }

        Ok(Self {
            min: min.min(max),
            max: min.max(max),
            origin: finite_point(origin, "slice range origin")?,
            normal: unit_direction(normal, "slice range normal")?,
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    #[must_use]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Signed distance of `point` from `origin` along `normal`.
    #[must_use]
    pub fn project(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, point: DVec3, tolerance: f64) -> bool {
        let projected = self.project(point);
        projected >= self.min - tolerance && projected <= self.max + tolerance
    }

    /// Moves `point` along `normal` just enough to land inside the range.
    /// The component orthogonal to `normal` is preserved.
    #[must_use]
    pub fn clamp_point(&self, point: DVec3) -> DVec3 {
        let projected = self.project(point);
        point + self.normal * (self.clamp(projected) - projected)
    }
}

/// Computes the range the focal point may travel along `view_plane_normal`
/// while staying inside `geometry`, measured from `reference_point`.
///
/// Every corner of the volume is projected onto the normal; the extremes of
/// those projections bound the range.
pub fn slice_range(
    geometry: &VolumeGeometry,
    view_plane_normal: DVec3,
    reference_point: DVec3,
) -> NavResult<SliceRange> {
    let normal = unit_direction(view_plane_normal, "view plane normal")?;
    let origin = finite_point(reference_point, "slice range reference point")?;

    let (min, max) = geometry
        .corners()
        .iter()
        .map(|corner| (*corner - origin).dot(normal))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), projected| {
            (min.min(projected), max.max(projected))
        });

    SliceRange::new(min, max, origin, normal)
}
