mod client;
mod producer;
mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use client::ClientScene;
pub use producer::{SceneClient, SceneProducer};
pub use registry::SceneRegistry;

/// Identity of a scene pair within one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub u32);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Producer-issued handle to a client scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub u64);
