use glam::DVec3;

use crate::core::validation::{finite_point, positive_spacing, unit_direction};
use crate::error::{NavError, NavResult};

/// Largest `|cos|` accepted between two direction axes.
const ORTHOGONALITY_EPSILON: f64 = 1e-6;

/// World-space geometry of a voxel volume.
///
/// Voxel `(i, j, k)` sits at
/// `origin + direction[0] * i * spacing.x + direction[1] * j * spacing.y + direction[2] * k * spacing.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeGeometry {
    origin: DVec3,
    direction: [DVec3; 3],
    spacing: DVec3,
    dimensions: [u32; 3],
}

impl VolumeGeometry {
    /// Creates a geometry from image-data metadata.
    ///
    /// Direction axes are normalized and must be mutually orthogonal. Spacing
    /// must be finite and positive on
    /// every axis and each dimension must hold at least one voxel.
    pub fn new(
        origin: DVec3,
        direction: [DVec3; 3],
        spacing: DVec3,
        dimensions: [u32; 3],
    ) -> NavResult<Self> {
        let origin = finite_point(origin, "volume origin")?;
        let direction = [
            unit_direction(direction[0], "volume row direction")?,
            unit_direction(direction[1], "volume column direction")?,
            unit_direction(direction[2], "volume slice direction")?,
        ];
        let [row, column, slice] = direction;
        let skew = row.dot(column).abs().max(row.dot(slice).abs()).max(column.dot(slice).abs());
        if skew > ORTHOGONALITY_EPSILON {
            return Err(NavError::InvalidData(format!(
                "volume direction axes must be orthogonal, largest |cos| is {skew}"
            )));
        }
        let spacing = DVec3::new(
            positive_spacing(spacing.x, "volume spacing x")?,
            positive_spacing(spacing.y, "volume spacing y")?,
            positive_spacing(spacing.z, "volume spacing z")?,
        );
        if dimensions.contains(&0) {
            return Err(NavError::InvalidData(format!(
                "volume dimensions must be >= 1 on every axis, got {dimensions:?}"
            )));
        }

        Ok(Self {
            origin,
            direction,
            spacing,
            dimensions,
        })
    }

    /// Geometry whose axes match the world axes.
    pub fn axis_aligned(origin: DVec3, spacing: DVec3, dimensions: [u32; 3]) -> NavResult<Self> {
        Self::new(origin, [DVec3::X, DVec3::Y, DVec3::Z], spacing, dimensions)
    }

    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    #[must_use]
    pub fn direction(&self) -> [DVec3; 3] {
        self.direction
    }

    #[must_use]
    pub fn spacing(&self) -> DVec3 {
        self.spacing
    }

    #[must_use]
    pub fn dimensions(&self) -> [u32; 3] {
        self.dimensions
    }

    /// Physical length covered by voxel centers on each axis.
    #[must_use]
    pub fn extent(&self) -> DVec3 {
        let [i, j, k] = self.dimensions;
        DVec3::new(
            f64::from(i - 1) * self.spacing.x,
            f64::from(j - 1) * self.spacing.y,
            f64::from(k - 1) * self.spacing.z,
        )
    }

    /// The eight world-space corners of the voxel-center bounding box.
    #[must_use]
    pub fn corners(&self) -> [DVec3; 8] {
        let extent = self.extent();
        let [u, v, w] = [
            self.direction[0] * extent.x,
            self.direction[1] * extent.y,
            self.direction[2] * extent.z,
        ];
        let o = self.origin;
        [
            o,
            o + u,
            o + v,
            o + u + v,
            o + w,
            o + u + w,
            o + v + w,
            o + u + v + w,
        ]
    }

    #[must_use]
    pub fn center(&self) -> DVec3 {
        let extent = self.extent();
        self.origin
            + (self.direction[0] * extent.x
                + self.direction[1] * extent.y
                + self.direction[2] * extent.z)
                * 0.5
    }

    /// Distance between adjacent slices when the volume is cut perpendicular
    /// to `normal`.
    ///
    /// Each axis spacing is weighted by how much that axis aligns with the
    /// normal; an axis-aligned cut yields exactly that axis' spacing.
    #[must_use]
    pub fn spacing_in_normal_direction(&self, normal: DVec3) -> f64 {
        let normal = normal.normalize_or_zero();
        let projected = DVec3::new(
            self.direction[0].dot(normal) * self.spacing.x,
            self.direction[1].dot(normal) * self.spacing.y,
            self.direction[2].dot(normal) * self.spacing.z,
        );
        projected.length()
    }
}
