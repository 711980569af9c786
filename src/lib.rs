pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod harness;
pub mod math;
pub mod scene;
pub mod scenes;
pub mod types;

pub use error::{FileError, SceneError};
pub use scene::{SceneId, SceneRegistry};
