use glam::Vec3;

use super::common::{golden_hue, hsv_to_rgb, present};
use super::{TestLogic, TestLogicKind};
use crate::camera::Camera;
use crate::error::SceneError;
use crate::scene::ClientScene;
use crate::types::BoxData;

const SPONGE_SIZE: f32 = 9.0;

/// Menger sponge whose recursion depth is the scene state
#[derive(Debug)]
pub struct FractalScene {
    state: u32,
}

impl FractalScene {
    pub const MAX_DEPTH: u32 = 3;

    pub fn new(scene: &mut ClientScene, state: u32, camera: Vec3) -> Result<Self, SceneError> {
        scene.set_camera(Camera::looking_at(camera, Vec3::new(0.0, SPONGE_SIZE * 0.5, 0.0)));
        let mut logic = Self { state };
        logic.set_state(scene, state)?;
        Ok(logic)
    }
}

fn menger_sponge(center: Vec3, size: f32, depth: u32, color_seed: u32, out: &mut Vec<BoxData>) {
    if depth == 0 {
        let color = hsv_to_rgb(golden_hue(color_seed), 0.7, 0.8);
        out.push(BoxData::cube(center, size, color));
        return;
    }

    let sub = size / 3.0;
    for x in -1i32..=1 {
        for y in -1i32..=1 {
            for z in -1i32..=1 {
                // Face centres and the core are removed
                if [x, y, z].iter().filter(|&&v| v == 0).count() >= 2 {
                    continue;
                }
                let offset = Vec3::new(x as f32, y as f32, z as f32) * sub;
                menger_sponge(
                    center + offset,
                    sub,
                    depth - 1,
                    color_seed.wrapping_add((x + y * 3 + z * 9) as u32),
                    out,
                );
            }
        }
    }
}

impl TestLogic for FractalScene {
    fn kind(&self) -> TestLogicKind {
        TestLogicKind::Fractal
    }

    fn state(&self) -> u32 {
        self.state
    }

    fn set_state(&mut self, scene: &mut ClientScene, state: u32) -> Result<(), SceneError> {
        if state > Self::MAX_DEPTH {
            return Err(SceneError::UnknownState {
                kind: self.kind(),
                state,
            });
        }

        let mut boxes = Vec::new();
        menger_sponge(Vec3::new(0.0, SPONGE_SIZE * 0.5, 0.0), SPONGE_SIZE, state, 0, &mut boxes);
        log::debug!("scene {}: menger sponge depth {} ({} boxes)", scene.id(), state, boxes.len());
        present(scene, boxes);
        self.state = state;
        Ok(())
    }
}
