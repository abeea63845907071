pub mod camera;
pub mod focal_point;
pub mod slice_range;
pub mod stack_index;
pub mod target_volume;
mod validation;
pub mod volume;

pub use camera::{Camera, CameraUpdate};
pub use focal_point::{SliceSnapMode, snap_focal_point};
pub use slice_range::{SliceRange, slice_range};
pub use stack_index::next_index;
pub use target_volume::{TargetVolume, resolve_target_volume};
pub use volume::VolumeGeometry;
