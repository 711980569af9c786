use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fs::{self, File};
use crate::scene::SceneId;
use crate::scenes::TestLogicKind;

/// How far a scene is made visible once published
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationMode {
    #[default]
    LocalOnly,
    LocalAndRemote,
}

/// Per-scene settings handed through to the scene producer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub publication: PublicationMode,
}

/// Settings for scenes whose content goes through the filesystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Directory that receives serialized scene content
    pub scene_dir: PathBuf,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            scene_dir: PathBuf::from("scenes"),
        }
    }
}

/// One scene the harness creates at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSetup {
    pub kind: TestLogicKind,
    #[serde(default)]
    pub state: u32,
    #[serde(default)]
    pub camera: [f32; 3],
    /// Explicit identity; auto-assigned when absent
    #[serde(default)]
    pub id: Option<SceneId>,
    #[serde(default)]
    pub config: SceneConfig,
}

/// State change applied after every scene exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub scene: SceneId,
    pub kind: TestLogicKind,
    pub state: u32,
}

/// Harness run description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub framework: FrameworkConfig,
    pub scenes: Vec<SceneSetup>,
    pub transitions: Vec<Transition>,
    pub output_dir: Option<PathBuf>,
}

impl HarnessConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse harness configuration")
    }

    /// Load a configuration file
    pub fn load(file: &File) -> Result<Self> {
        if !file.exists() {
            anyhow::bail!("Configuration file {} does not exist", file);
        }
        let text = fs::read_all_text(file);
        Self::from_json(&text).with_context(|| format!("Invalid configuration in {}", file))
    }
}
