use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::validation::{finite_point, unit_direction};
use crate::error::NavResult;

/// Camera pose of a volumetric viewport.
///
/// `view_plane_normal` is the unit slicing direction. Scrolling moves
/// `focal_point` along it and translates `position` by the same amount, so
/// `position - focal_point` never changes during a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub focal_point: DVec3,
    pub position: DVec3,
    pub view_plane_normal: DVec3,
}

impl Camera {
    /// Builds a camera, normalizing `view_plane_normal`.
    pub fn new(focal_point: DVec3, position: DVec3, view_plane_normal: DVec3) -> NavResult<Self> {
        Ok(Self {
            focal_point: finite_point(focal_point, "camera focal point")?,
            position: finite_point(position, "camera position")?,
            view_plane_normal: unit_direction(view_plane_normal, "view plane normal")?,
        })
    }

    /// Places the eye `distance` units from `focal_point` along the normal.
    pub fn looking_along(
        focal_point: DVec3,
        view_plane_normal: DVec3,
        distance: f64,
    ) -> NavResult<Self> {
        let normal = unit_direction(view_plane_normal, "view plane normal")?;
        Self::new(focal_point, focal_point + normal * distance, normal)
    }

    /// Eye offset from the focal point.
    #[must_use]
    pub fn offset(self) -> DVec3 {
        self.position - self.focal_point
    }

    #[must_use]
    pub fn distance(self) -> f64 {
        self.offset().length()
    }

    /// Returns the camera with `update` applied; orientation is untouched.
    #[must_use]
    pub fn with_update(self, update: CameraUpdate) -> Self {
        Self {
            focal_point: update.focal_point,
            position: update.position,
            ..self
        }
    }
}

/// New focal point and eye position committed to a viewport in one call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraUpdate {
    pub focal_point: DVec3,
    pub position: DVec3,
}

impl CameraUpdate {
    /// Moves both points of `camera` by `translation`.
    #[must_use]
    pub fn translated(camera: &Camera, translation: DVec3) -> Self {
        Self {
            focal_point: camera.focal_point + translation,
            position: camera.position + translation,
        }
    }

    /// Translation this update applies to `camera`'s focal point.
    #[must_use]
    pub fn translation_from(self, camera: &Camera) -> DVec3 {
        self.focal_point - camera.focal_point
    }
}
