use anyhow::{Context, Result};
use glam::Vec3;
use serde::Serialize;

use crate::config::HarnessConfig;
use crate::fs::{self, File};
use crate::scene::{SceneClient, SceneId, SceneProducer, SceneRegistry};
use crate::scenes::TestLogicKind;

/// Snapshot of one scene after a harness run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub id: SceneId,
    pub kind: TestLogicKind,
    pub state: u32,
    pub box_count: usize,
    pub moving_boxes: usize,
    pub bounds_min: Option<[f32; 3]>,
    pub bounds_max: Option<[f32; 3]>,
    pub camera: [f32; 3],
    pub camera_forward: [f32; 3],
    pub flush_count: u64,
}

impl SceneSummary {
    pub fn capture<P: SceneProducer>(registry: &SceneRegistry<P>, id: SceneId) -> Result<Self> {
        let scene = registry.scene(id)?;
        let bounds = scene.bounds();

        Ok(Self {
            id,
            kind: registry.scene_kind(id)?,
            state: registry.scene_state(id)?,
            box_count: scene.boxes().len(),
            moving_boxes: scene.boxes().iter().filter(|b| b.is_moving()).count(),
            bounds_min: bounds.map(|b| b.min.to_array()),
            bounds_max: bounds.map(|b| b.max.to_array()),
            camera: scene.camera().position.to_array(),
            camera_forward: scene.camera().forward().to_array(),
            flush_count: scene.flush_count(),
        })
    }

    pub fn print_summary(&self) {
        println!("\n=== scene {} ({:?}) ===", self.id, self.kind);
        println!("State:   {}", self.state);
        println!("Boxes:   {} ({} moving)", self.box_count, self.moving_boxes);
        if let (Some(min), Some(max)) = (self.bounds_min, self.bounds_max) {
            println!("Bounds:  {:?} .. {:?}", min, max);
        }
        println!("Camera:  {:?} facing {:?}", self.camera, self.camera_forward);
        println!("Flushes: {}", self.flush_count);
    }
}

/// Create every configured scene, apply the transitions and capture the result
/// All scenes are destroyed again before returning, also on failure
pub fn run(config: &HarnessConfig) -> Result<Vec<SceneSummary>> {
    let mut registry = SceneRegistry::new(SceneClient::new());
    let result = drive(&mut registry, config);
    registry.destroy_scenes();
    result
}

fn drive<P: SceneProducer>(registry: &mut SceneRegistry<P>, config: &HarnessConfig) -> Result<Vec<SceneSummary>> {
    let mut ids = Vec::with_capacity(config.scenes.len());

    for setup in &config.scenes {
        let camera = Vec3::from_array(setup.camera);
        let id = match (setup.kind, setup.id) {
            (TestLogicKind::FileLoading, Some(id)) => {
                registry.create_file_loading_scene(id, camera, &config.framework, setup.state)
            }
            (TestLogicKind::FileLoading, None) => {
                anyhow::bail!("File loading scenes need an explicit id")
            }
            (kind, Some(id)) => registry.create_scene_with_id(id, kind, setup.state, camera, &setup.config),
            (kind, None) => registry.create_scene(kind, setup.state, camera, &setup.config),
        }
        .with_context(|| format!("Failed to create {:?} scene", setup.kind))?;
        ids.push(id);
    }

    for transition in &config.transitions {
        registry
            .set_scene_state(transition.scene, transition.kind, transition.state)
            .with_context(|| {
                format!(
                    "Failed to move scene {} to state {}",
                    transition.scene, transition.state
                )
            })?;
    }

    ids.iter()
        .map(|&id| SceneSummary::capture(&*registry, id))
        .collect()
}

/// Write one `scene_<id>.json` per summary into `dir`
pub fn write_summaries(dir: &File, summaries: &[SceneSummary]) -> Result<()> {
    fs::create_directories(dir)?;
    for summary in summaries {
        let file = dir.join(format!("scene_{}.json", summary.id));
        let text = serde_json::to_string_pretty(summary)?;
        fs::write_all_text(&file, &text)?;
        log::info!("wrote {}", file);
    }
    Ok(())
}
