use super::{SceneHandle, SceneId};
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::math::AABB;
use crate::types::BoxData;

/// Client-side scene as handed out by a scene producer
#[derive(Debug, Clone)]
pub struct ClientScene {
    id: SceneId,
    handle: SceneHandle,
    config: SceneConfig,
    camera: Camera,
    boxes: Vec<BoxData>,
    flush_count: u64,
}

impl ClientScene {
    pub fn new(id: SceneId, handle: SceneHandle, config: SceneConfig) -> Self {
        Self {
            id,
            handle,
            config,
            camera: Camera::default(),
            boxes: Vec::new(),
            flush_count: 0,
        }
    }

    pub fn id(&self) -> SceneId {
        self.id
    }

    pub fn handle(&self) -> SceneHandle {
        self.handle
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn boxes(&self) -> &[BoxData] {
        &self.boxes
    }

    pub fn add_box(&mut self, data: BoxData) {
        self.boxes.push(data);
    }

    /// Swap the whole content for `boxes`
    pub fn replace_boxes(&mut self, boxes: Vec<BoxData>) {
        self.boxes = boxes;
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Mark the current content as a finished frame of the scene
    pub fn flush(&mut self) -> u64 {
        self.flush_count += 1;
        self.flush_count
    }

    pub fn flush_count(&self) -> u64 {
        self.flush_count
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::enclosing(self.boxes.iter().map(BoxData::bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_scene_is_empty() {
        let scene = ClientScene::new(SceneId(3), SceneHandle(1), SceneConfig::default());
        assert_eq!(scene.id(), SceneId(3));
        assert!(scene.boxes().is_empty());
        assert_eq!(scene.bounds(), None);
        assert_eq!(scene.flush_count(), 0);
    }

    #[test]
    fn test_content_and_flush() {
        let mut scene = ClientScene::new(SceneId(1), SceneHandle(1), SceneConfig::default());
        scene.add_box(BoxData::cube(Vec3::ZERO, 2.0, [1.0, 1.0, 1.0]));
        scene.add_box(BoxData::cube(Vec3::new(4.0, 0.0, 0.0), 2.0, [1.0, 1.0, 1.0]));
        assert_eq!(scene.flush(), 1);
        assert_eq!(scene.flush(), 2);

        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(5.0, 1.0, 1.0));

        scene.clear();
        assert!(scene.boxes().is_empty());
    }
}
