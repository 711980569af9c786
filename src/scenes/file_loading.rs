use std::mem::size_of;

use glam::Vec3;

use super::common::present;
use super::{TestLogic, TestLogicKind};
use crate::camera::Camera;
use crate::config::FrameworkConfig;
use crate::error::SceneError;
use crate::fs::{self, File, ReadOutcome};
use crate::scene::ClientScene;
use crate::types::BoxData;

/// Scene whose content always travels through a file on disk
///
/// Every state is first written as raw box records into the framework's scene
/// directory, then read back and only the decoded records reach the client scene.
#[derive(Debug)]
pub struct FileLoadingScene {
    state: u32,
    content_file: File,
}

impl FileLoadingScene {
    pub const SINGLE_BOX: u32 = 0;
    pub const BOX_ROW: u32 = 1;

    pub fn new(
        scene: &mut ClientScene,
        state: u32,
        camera: Vec3,
        framework: &FrameworkConfig,
    ) -> Result<Self, SceneError> {
        let dir = File::new(&framework.scene_dir);
        fs::create_directories(&dir)?;

        scene.set_camera(Camera::at(camera));
        let mut logic = Self {
            state,
            content_file: dir.join(format!("scene_{}.bin", scene.id())),
        };
        logic.set_state(scene, state)?;
        Ok(logic)
    }

    pub fn content_file(&self) -> &File {
        &self.content_file
    }

    fn content(state: u32) -> Option<Vec<BoxData>> {
        match state {
            Self::SINGLE_BOX => Some(vec![BoxData::cube(Vec3::ZERO, 2.0, [0.9, 0.4, 0.1])]),
            Self::BOX_ROW => Some(
                (0..5)
                    .map(|i| {
                        let x = (i as f32 - 2.0) * 3.0;
                        BoxData::cube(Vec3::new(x, 0.0, 0.0), 2.0, [0.1, 0.4 + i as f32 * 0.1, 0.9])
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    fn save(&self, boxes: &[BoxData]) -> Result<(), SceneError> {
        fs::write_all_bytes(&self.content_file, bytemuck::cast_slice(boxes))?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<BoxData>, SceneError> {
        let outcome = fs::read_all_bytes(&self.content_file)?;
        self.decode(outcome)
    }

    /// Only a complete read of whole records counts as scene content
    fn decode(&self, outcome: ReadOutcome) -> Result<Vec<BoxData>, SceneError> {
        let len = outcome.bytes.len();
        if !outcome.is_complete() || len % size_of::<BoxData>() != 0 {
            log::warn!("{}: read ended with {:?} after {} bytes", self.content_file, outcome.exit, len);
            return Err(SceneError::CorruptContent {
                path: self.content_file.path().to_path_buf(),
                len,
            });
        }

        Ok(outcome
            .bytes
            .chunks_exact(size_of::<BoxData>())
            .map(bytemuck::pod_read_unaligned::<BoxData>)
            .collect())
    }
}

impl TestLogic for FileLoadingScene {
    fn kind(&self) -> TestLogicKind {
        TestLogicKind::FileLoading
    }

    fn state(&self) -> u32 {
        self.state
    }

    fn set_state(&mut self, scene: &mut ClientScene, state: u32) -> Result<(), SceneError> {
        let boxes = Self::content(state).ok_or(SceneError::UnknownState {
            kind: self.kind(),
            state,
        })?;

        self.save(&boxes)?;
        let loaded = self.load()?;
        log::debug!(
            "scene {}: loaded {} boxes from {}",
            scene.id(),
            loaded.len(),
            self.content_file
        );
        present(scene, loaded);
        self.state = state;
        Ok(())
    }
}
