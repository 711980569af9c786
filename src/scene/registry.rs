use std::collections::HashMap;

use glam::Vec3;

use super::{ClientScene, SceneClient, SceneHandle, SceneId, SceneProducer};
use crate::config::{FrameworkConfig, SceneConfig};
use crate::error::SceneError;
use crate::scenes::{FileLoadingScene, TestLogic, TestLogicKind};

/// A registered scene: the producer's handle plus the test logic bound to it
struct ScenePair {
    client_scene: SceneHandle,
    test_logic: Box<dyn TestLogic>,
}

/// Identity-keyed store of client scenes and the test logic driving them
///
/// Identities handed out by [`SceneRegistry::create_scene`] start at 1 and are
/// never reused by the same registry, even after the scene is destroyed. The
/// registry owns every test logic object; client scenes stay owned by the
/// producer and are only requested and released through it.
pub struct SceneRegistry<P: SceneProducer = SceneClient> {
    producer: P,
    next_scene_id: u32,
    scenes: HashMap<SceneId, ScenePair>,
}

impl<P: SceneProducer> SceneRegistry<P> {
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            next_scene_id: 1,
            scenes: HashMap::new(),
        }
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    /// Create a scene under the next free identity
    pub fn create_scene(
        &mut self,
        kind: TestLogicKind,
        state: u32,
        camera: Vec3,
        config: &SceneConfig,
    ) -> Result<SceneId, SceneError> {
        self.create_scene_with(None, config, |scene| kind.construct(scene, state, camera))
    }

    /// Create a scene under a caller-chosen identity
    pub fn create_scene_with_id(
        &mut self,
        id: SceneId,
        kind: TestLogicKind,
        state: u32,
        camera: Vec3,
        config: &SceneConfig,
    ) -> Result<SceneId, SceneError> {
        self.create_scene_with(Some(id), config, |scene| kind.construct(scene, state, camera))
    }

    /// Create a scene whose content is written to and loaded back from disk
    pub fn create_file_loading_scene(
        &mut self,
        id: SceneId,
        camera: Vec3,
        framework: &FrameworkConfig,
        state: u32,
    ) -> Result<SceneId, SceneError> {
        self.create_scene_with(Some(id), &SceneConfig::default(), |scene| {
            Ok(Box::new(FileLoadingScene::new(scene, state, camera, framework)?) as Box<dyn TestLogic>)
        })
    }

    /// Create a scene with test logic built by `build`
    ///
    /// Without an explicit `id` the next identity is allocated. A duplicate
    /// identity is refused before the producer is asked for a scene; if `build`
    /// fails, the freshly created client scene is released again.
    pub fn create_scene_with<F>(
        &mut self,
        id: Option<SceneId>,
        config: &SceneConfig,
        build: F,
    ) -> Result<SceneId, SceneError>
    where
        F: FnOnce(&mut ClientScene) -> Result<Box<dyn TestLogic>, SceneError>,
    {
        let id = id.unwrap_or_else(|| self.allocate_id());
        if self.scenes.contains_key(&id) {
            return Err(SceneError::DuplicateScene(id));
        }

        let handle = self.producer.create_scene(id, config)?;
        let built = match self.producer.scene_mut(handle) {
            Some(scene) => build(scene),
            None => Err(SceneError::Producer {
                id,
                reason: "created scene is not reachable".to_string(),
            }),
        };

        let test_logic = match built {
            Ok(logic) => logic,
            Err(e) => {
                self.producer.release_scene(handle);
                return Err(e);
            }
        };

        log::info!(
            "created scene {} ({:?}, state {})",
            id,
            test_logic.kind(),
            test_logic.state()
        );
        self.scenes.insert(
            id,
            ScenePair {
                client_scene: handle,
                test_logic,
            },
        );
        Ok(id)
    }

    pub fn scene(&self, id: SceneId) -> Result<&ClientScene, SceneError> {
        let pair = self.scenes.get(&id).ok_or(SceneError::UnknownScene(id))?;
        self.producer
            .scene(pair.client_scene)
            .ok_or(SceneError::UnknownScene(id))
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Result<&mut ClientScene, SceneError> {
        let pair = self.scenes.get(&id).ok_or(SceneError::UnknownScene(id))?;
        self.producer
            .scene_mut(pair.client_scene)
            .ok_or(SceneError::UnknownScene(id))
    }

    /// Drive a scene's test logic into `state`
    /// `kind` must match the variant the scene was created with
    pub fn set_scene_state(
        &mut self,
        id: SceneId,
        kind: TestLogicKind,
        state: u32,
    ) -> Result<(), SceneError> {
        let pair = self.scenes.get_mut(&id).ok_or(SceneError::UnknownScene(id))?;

        let actual = pair.test_logic.kind();
        if actual != kind {
            return Err(SceneError::KindMismatch {
                id,
                expected: kind,
                actual,
            });
        }

        let scene = self
            .producer
            .scene_mut(pair.client_scene)
            .ok_or(SceneError::UnknownScene(id))?;
        pair.test_logic.set_state(scene, state)?;
        log::debug!("scene {} now in state {}", id, state);
        Ok(())
    }

    pub fn scene_state(&self, id: SceneId) -> Result<u32, SceneError> {
        self.scenes
            .get(&id)
            .map(|pair| pair.test_logic.state())
            .ok_or(SceneError::UnknownScene(id))
    }

    pub fn scene_kind(&self, id: SceneId) -> Result<TestLogicKind, SceneError> {
        self.scenes
            .get(&id)
            .map(|pair| pair.test_logic.kind())
            .ok_or(SceneError::UnknownScene(id))
    }

    /// Destroy one scene: its test logic first, then the client scene
    /// Returns false, changing nothing, when `id` is not registered
    pub fn destroy_scene(&mut self, id: SceneId) -> bool {
        let Some(ScenePair {
            client_scene,
            test_logic,
        }) = self.scenes.remove(&id)
        else {
            log::debug!("destroy of unregistered scene {} ignored", id);
            return false;
        };

        drop(test_logic);
        if !self.producer.release_scene(client_scene) {
            log::warn!("producer no longer knew client scene of scene {}", id);
        }
        log::info!("destroyed scene {}", id);
        true
    }

    /// Destroy every registered scene, in no particular order
    pub fn destroy_scenes(&mut self) {
        let ids: Vec<SceneId> = self.scenes.keys().copied().collect();
        for id in ids {
            self.destroy_scene(id);
        }
    }

    pub fn contains(&self, id: SceneId) -> bool {
        self.scenes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Registered identities in ascending order
    pub fn scene_ids(&self) -> Vec<SceneId> {
        let mut ids: Vec<SceneId> = self.scenes.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Next counter value not held by a caller-chosen identity
    fn allocate_id(&mut self) -> SceneId {
        while self.scenes.contains_key(&SceneId(self.next_scene_id)) {
            self.next_scene_id += 1;
        }
        let id = SceneId(self.next_scene_id);
        self.next_scene_id += 1;
        id
    }
}

impl Default for SceneRegistry<SceneClient> {
    fn default() -> Self {
        Self::new(SceneClient::new())
    }
}

impl<P: SceneProducer> Drop for SceneRegistry<P> {
    fn drop(&mut self) {
        self.destroy_scenes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Producer that records the order of requests it receives
    #[derive(Default)]
    struct RecordingProducer {
        inner: SceneClient,
        released: Vec<SceneId>,
        fail_next: bool,
    }

    impl SceneProducer for RecordingProducer {
        fn create_scene(&mut self, id: SceneId, config: &SceneConfig) -> Result<SceneHandle, SceneError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(SceneError::Producer {
                    id,
                    reason: "out of scenes".to_string(),
                });
            }
            self.inner.create_scene(id, config)
        }

        fn scene(&self, handle: SceneHandle) -> Option<&ClientScene> {
            self.inner.scene(handle)
        }

        fn scene_mut(&mut self, handle: SceneHandle) -> Option<&mut ClientScene> {
            self.inner.scene_mut(handle)
        }

        fn release_scene(&mut self, handle: SceneHandle) -> bool {
            if let Some(scene) = self.inner.scene(handle) {
                self.released.push(scene.id());
            }
            self.inner.release_scene(handle)
        }
    }

    #[test]
    fn producer_failure_is_propagated_without_registering() {
        let mut registry = SceneRegistry::new(RecordingProducer {
            fail_next: true,
            ..Default::default()
        });

        let err = registry
            .create_scene(TestLogicKind::BoxGrid, 0, Vec3::ZERO, &SceneConfig::default())
            .unwrap_err();
        assert!(matches!(err, SceneError::Producer { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn failed_test_logic_releases_client_scene() {
        let mut registry = SceneRegistry::new(RecordingProducer::default());

        let err = registry
            .create_scene(TestLogicKind::Walls, 99, Vec3::ZERO, &SceneConfig::default())
            .unwrap_err();
        assert!(matches!(err, SceneError::UnknownState { state: 99, .. }));
        assert!(registry.is_empty());
        assert_eq!(registry.producer().released, vec![SceneId(1)]);
        assert_eq!(registry.producer().inner.live_scene_count(), 0);
    }

    #[test]
    fn destroy_releases_through_producer() {
        let mut registry = SceneRegistry::new(RecordingProducer::default());
        let id = registry
            .create_scene(TestLogicKind::BoxGrid, 0, Vec3::ZERO, &SceneConfig::default())
            .unwrap();

        assert!(registry.destroy_scene(id));
        assert_eq!(registry.producer().released, vec![id]);
        assert!(!registry.destroy_scene(id));
        assert_eq!(registry.producer().released.len(), 1);
    }

    #[test]
    fn failed_creation_still_consumes_identity() {
        let mut registry = SceneRegistry::new(SceneClient::new());
        registry
            .create_scene(TestLogicKind::Fractal, 100, Vec3::ZERO, &SceneConfig::default())
            .unwrap_err();

        let id = registry
            .create_scene(TestLogicKind::Fractal, 0, Vec3::ZERO, &SceneConfig::default())
            .unwrap();
        assert_eq!(id, SceneId(2));
    }

    #[test]
    fn auto_identity_skips_explicit_ones() {
        let mut registry = SceneRegistry::new(SceneClient::new());
        for id in [1, 2, 4] {
            registry
                .create_scene_with_id(SceneId(id), TestLogicKind::BoxGrid, 0, Vec3::ZERO, &SceneConfig::default())
                .unwrap();
        }

        let auto: Vec<SceneId> = (0..2)
            .map(|_| {
                registry
                    .create_scene(TestLogicKind::BoxGrid, 0, Vec3::ZERO, &SceneConfig::default())
                    .unwrap()
            })
            .collect();
        assert_eq!(auto, vec![SceneId(3), SceneId(5)]);
    }
}
