use std::collections::HashMap;

use super::{ClientScene, SceneHandle, SceneId};
use crate::config::SceneConfig;
use crate::error::SceneError;

/// Creates, owns and releases client scenes
/// The registry only ever holds handles; the producer stays the sole owner
pub trait SceneProducer {
    fn create_scene(&mut self, id: SceneId, config: &SceneConfig) -> Result<SceneHandle, SceneError>;

    fn scene(&self, handle: SceneHandle) -> Option<&ClientScene>;

    fn scene_mut(&mut self, handle: SceneHandle) -> Option<&mut ClientScene>;

    /// Release a scene; returns false for an unknown handle
    fn release_scene(&mut self, handle: SceneHandle) -> bool;
}

/// In-process scene producer
#[derive(Debug, Default)]
pub struct SceneClient {
    scenes: HashMap<SceneHandle, ClientScene>,
    next_handle: u64,
}

impl SceneClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Handle of the live scene with identity `id`
    pub fn find(&self, id: SceneId) -> Option<SceneHandle> {
        self.scenes
            .values()
            .find(|scene| scene.id() == id)
            .map(ClientScene::handle)
    }
}

impl SceneProducer for SceneClient {
    fn create_scene(&mut self, id: SceneId, config: &SceneConfig) -> Result<SceneHandle, SceneError> {
        if self.find(id).is_some() {
            return Err(SceneError::Producer {
                id,
                reason: "a live scene already uses this identity".to_string(),
            });
        }

        self.next_handle += 1;
        let handle = SceneHandle(self.next_handle);
        self.scenes
            .insert(handle, ClientScene::new(id, handle, config.clone()));
        Ok(handle)
    }

    fn scene(&self, handle: SceneHandle) -> Option<&ClientScene> {
        self.scenes.get(&handle)
    }

    fn scene_mut(&mut self, handle: SceneHandle) -> Option<&mut ClientScene> {
        self.scenes.get_mut(&handle)
    }

    fn release_scene(&mut self, handle: SceneHandle) -> bool {
        self.scenes.remove(&handle).is_some()
    }
}
