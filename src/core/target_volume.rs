use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Camera, VolumeGeometry};

/// Volume chosen for a scroll, with its slice spacing along the current
/// view-plane normal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetVolume {
    pub volume_id: String,
    pub spacing_in_normal_direction: f64,
}

/// Picks the volume a scroll applies to among those attached to a viewport.
///
/// With a selector only the volume of that id qualifies. Without one the
/// volume with the finest spacing along the camera normal wins; the first
/// attached volume wins ties.
pub fn resolve_target_volume<'a, I>(
    volumes: I,
    camera: &Camera,
    selector: Option<&str>,
) -> Option<TargetVolume>
where
    I: IntoIterator<Item = (&'a str, &'a VolumeGeometry)>,
{
    let normal = camera.view_plane_normal;
    let mut candidates = volumes
        .into_iter()
        .map(|(volume_id, geometry)| (volume_id, geometry.spacing_in_normal_direction(normal)));

    let (volume_id, spacing) = match selector {
        Some(selector) => candidates.find(|(volume_id, _)| *volume_id == selector)?,
        None => candidates.min_by_key(|(_, spacing)| OrderedFloat(*spacing))?,
    };

    Some(TargetVolume {
        volume_id: volume_id.to_owned(),
        spacing_in_normal_direction: spacing,
    })
}
