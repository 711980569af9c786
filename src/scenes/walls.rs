use glam::Vec3;

use super::common::{ground, hsv_to_rgb, present};
use super::{TestLogic, TestLogicKind};
use crate::camera::Camera;
use crate::error::SceneError;
use crate::scene::ClientScene;
use crate::types::BoxData;

const BOX_SIZE: f32 = 2.0;
const SPACING: f32 = 0.2;
const WALL_THICKNESS: f32 = 2.0;
const HALF_SPAN: f32 = 20.0;

/// Four rainbow walls enclosing the origin
#[derive(Debug)]
pub struct WallsScene {
    state: u32,
}

impl WallsScene {
    pub const LOW_WALLS: u32 = 0;
    pub const HIGH_WALLS: u32 = 1;

    pub fn new(scene: &mut ClientScene, state: u32, camera: Vec3) -> Result<Self, SceneError> {
        scene.set_camera(Camera::at(camera));
        let mut logic = Self { state };
        logic.set_state(scene, state)?;
        Ok(logic)
    }

    fn layers(state: u32) -> Option<i32> {
        match state {
            Self::LOW_WALLS => Some(2),
            Self::HIGH_WALLS => Some(6),
            _ => None,
        }
    }
}

fn walls(layers: i32) -> Vec<BoxData> {
    let step = BOX_SIZE + SPACING;
    let per_segment = ((2.0 * HALF_SPAN / step) as i32).max(1);
    let mut boxes = vec![ground(HALF_SPAN * 2.0)];

    for layer in 0..layers {
        let y = layer as f32 * step;
        for segment in 0..per_segment {
            let progress = (segment as f32 / per_segment as f32 + layer as f32 / layers as f32 * 0.3) % 1.0;
            let color = hsv_to_rgb(progress, 0.8, 0.9);
            let along = -HALF_SPAN + segment as f32 * step;

            // north, south, west, east
            boxes.push(BoxData::new(
                [along, y, -HALF_SPAN - WALL_THICKNESS],
                [along + BOX_SIZE, y + BOX_SIZE, -HALF_SPAN],
                color,
            ));
            boxes.push(BoxData::new(
                [along, y, HALF_SPAN],
                [along + BOX_SIZE, y + BOX_SIZE, HALF_SPAN + WALL_THICKNESS],
                color,
            ));
            boxes.push(BoxData::new(
                [-HALF_SPAN - WALL_THICKNESS, y, along],
                [-HALF_SPAN, y + BOX_SIZE, along + BOX_SIZE],
                color,
            ));
            boxes.push(BoxData::new(
                [HALF_SPAN, y, along],
                [HALF_SPAN + WALL_THICKNESS, y + BOX_SIZE, along + BOX_SIZE],
                color,
            ));
        }
    }

    boxes
}

impl TestLogic for WallsScene {
    fn kind(&self) -> TestLogicKind {
        TestLogicKind::Walls
    }

    fn state(&self) -> u32 {
        self.state
    }

    fn set_state(&mut self, scene: &mut ClientScene, state: u32) -> Result<(), SceneError> {
        let layers = Self::layers(state).ok_or(SceneError::UnknownState {
            kind: self.kind(),
            state,
        })?;
        let boxes = walls(layers);
        log::debug!("scene {}: walls state {} ({} boxes)", scene.id(), state, boxes.len());
        present(scene, boxes);
        self.state = state;
        Ok(())
    }
}
