use indexmap::IndexMap;

use crate::core::{Camera, CameraUpdate, TargetVolume, VolumeGeometry, resolve_target_volume};
use crate::viewport::{Viewport, ViewportVariant, VolumeNavigation};

/// Renderable handle the rendering side keeps for an attached volume.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeActor {
    pub uid: String,
    pub geometry: VolumeGeometry,
}

/// In-memory volume viewport.
///
/// Loaded volumes and their actors are tracked separately, mirroring a
/// renderer that may drop an actor while the volume stays attached.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeViewportState {
    camera: Camera,
    volumes: IndexMap<String, VolumeGeometry>,
    actors: IndexMap<String, VolumeActor>,
    render_requests: usize,
}

impl VolumeViewportState {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            volumes: IndexMap::new(),
            actors: IndexMap::new(),
            render_requests: 0,
        }
    }

    /// Attaches a volume together with its actor. Re-adding an id replaces
    /// both but keeps its attachment order.
    pub fn add_volume(&mut self, volume_id: impl Into<String>, geometry: VolumeGeometry) {
        let volume_id = volume_id.into();
        self.actors.insert(
            volume_id.clone(),
            VolumeActor {
                uid: volume_id.clone(),
                geometry,
            },
        );
        self.volumes.insert(volume_id, geometry);
    }

    #[must_use]
    pub fn with_volume(mut self, volume_id: impl Into<String>, geometry: VolumeGeometry) -> Self {
        self.add_volume(volume_id, geometry);
        self
    }

    /// Detaches a volume and its actor.
    pub fn remove_volume(&mut self, volume_id: &str) -> Option<VolumeGeometry> {
        self.actors.shift_remove(volume_id);
        self.volumes.shift_remove(volume_id)
    }

    /// Drops only the actor; the volume stays attached.
    pub fn remove_actor(&mut self, volume_id: &str) -> Option<VolumeActor> {
        self.actors.shift_remove(volume_id)
    }

    /// Replaces the whole camera, e.g. after the host re-orients the view.
    pub fn set_camera_pose(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn volume_ids(&self) -> impl Iterator<Item = &str> {
        self.volumes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn render_requests(&self) -> usize {
        self.render_requests
    }
}

impl VolumeNavigation for VolumeViewportState {
    fn camera(&self) -> Camera {
        self.camera
    }

    fn set_camera(&mut self, update: CameraUpdate) {
        self.camera = self.camera.with_update(update);
    }

    fn resolve_target_volume(
        &self,
        camera: &Camera,
        selector: Option<&str>,
    ) -> Option<TargetVolume> {
        resolve_target_volume(
            self.volumes
                .iter()
                .map(|(volume_id, geometry)| (volume_id.as_str(), geometry)),
            camera,
            selector,
        )
    }

    fn actor(&self, volume_id: &str) -> Option<&VolumeActor> {
        self.actors.get(volume_id)
    }

    fn render(&mut self) {
        self.render_requests += 1;
    }
}

impl Viewport for VolumeViewportState {
    fn variant(&mut self) -> ViewportVariant<'_> {
        ViewportVariant::Volume(self)
    }
}
