mod box_grid;
mod common;
mod file_loading;
mod fractal;
mod walls;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::scene::ClientScene;

pub use box_grid::BoxGridScene;
pub use file_loading::FileLoadingScene;
pub use fractal::FractalScene;
pub use walls::WallsScene;

/// Tag naming which test logic variant drives a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestLogicKind {
    BoxGrid,
    Walls,
    Fractal,
    FileLoading,
}

impl TestLogicKind {
    /// Build the test logic for this kind, populating `scene` with its initial state
    /// File loading scenes need a framework configuration and are built separately
    pub fn construct(
        self,
        scene: &mut ClientScene,
        state: u32,
        camera: Vec3,
    ) -> Result<Box<dyn TestLogic>, SceneError> {
        match self {
            TestLogicKind::BoxGrid => Ok(Box::new(BoxGridScene::new(scene, state, camera)?)),
            TestLogicKind::Walls => Ok(Box::new(WallsScene::new(scene, state, camera)?)),
            TestLogicKind::Fractal => Ok(Box::new(FractalScene::new(scene, state, camera)?)),
            TestLogicKind::FileLoading => Err(SceneError::NeedsFrameworkConfig { kind: self }),
        }
    }
}

/// Harness-side behaviour driving one client scene through numbered states
pub trait TestLogic {
    fn kind(&self) -> TestLogicKind;

    /// Last state successfully applied
    fn state(&self) -> u32;

    /// Rebuild the scene content for `state`
    /// An unknown state is an error and leaves the scene unchanged
    fn set_state(&mut self, scene: &mut ClientScene, state: u32) -> Result<(), SceneError>;
}
