use glam::Vec3;

use super::common::{ground, present};
use super::{TestLogic, TestLogicKind};
use crate::camera::Camera;
use crate::error::SceneError;
use crate::scene::ClientScene;
use crate::types::BoxData;

/// Flat grid of boxes on a ground plane
#[derive(Debug)]
pub struct BoxGridScene {
    state: u32,
}

impl BoxGridScene {
    pub const DEFAULT_GRID: u32 = 0;
    pub const DENSE_GRID: u32 = 1;
    pub const EMPTY: u32 = 2;
    pub const MOVING_BOXES: u32 = 3;

    pub fn new(scene: &mut ClientScene, state: u32, camera: Vec3) -> Result<Self, SceneError> {
        scene.set_camera(Camera::at(camera));
        let mut logic = Self { state };
        logic.set_state(scene, state)?;
        Ok(logic)
    }

    fn content(state: u32) -> Option<Vec<BoxData>> {
        match state {
            Self::DEFAULT_GRID => Some(grid(4, 2.0, 0.4)),
            Self::DENSE_GRID => Some(grid(10, 1.5, 0.4)),
            Self::EMPTY => Some(Vec::new()),
            Self::MOVING_BOXES => {
                let mut boxes = grid(4, 2.0, 0.4);
                boxes.extend([
                    BoxData::moving(
                        Vec3::splat(3.0),
                        Vec3::new(0.0, 2.0, -15.0),
                        Vec3::new(0.0, 12.0, -15.0),
                        [1.0, 0.1, 0.1],
                    ),
                    BoxData::moving(
                        Vec3::splat(2.0),
                        Vec3::new(-8.0, 3.0, -12.0),
                        Vec3::new(8.0, 3.0, -12.0),
                        [0.1, 1.0, 0.1],
                    ),
                ]);
                Some(boxes)
            }
            _ => None,
        }
    }
}

/// Ground plus a (2n)x(2n) grid of cubes
fn grid(n: i32, spacing: f32, half_size: f32) -> Vec<BoxData> {
    let cubes = (-n..n).flat_map(move |x| {
        (-n..n).map(move |z| {
            let fx = x as f32 * spacing;
            let fz = z as f32 * spacing - 10.0;
            let color = [
                ((x + n) as f32 / (2 * n) as f32) * 0.8 + 0.2,
                ((z + n) as f32 / (2 * n) as f32) * 0.8 + 0.2,
                0.6,
            ];
            BoxData::new(
                [fx - half_size, -0.5, fz - half_size],
                [fx + half_size, 0.5, fz + half_size],
                color,
            )
        })
    });

    std::iter::once(ground(50.0)).chain(cubes).collect()
}

impl TestLogic for BoxGridScene {
    fn kind(&self) -> TestLogicKind {
        TestLogicKind::BoxGrid
    }

    fn state(&self) -> u32 {
        self.state
    }

    fn set_state(&mut self, scene: &mut ClientScene, state: u32) -> Result<(), SceneError> {
        let boxes = Self::content(state).ok_or(SceneError::UnknownState {
            kind: self.kind(),
            state,
        })?;
        log::debug!("scene {}: box grid state {} ({} boxes)", scene.id(), state, boxes.len());
        present(scene, boxes);
        self.state = state;
        Ok(())
    }
}
