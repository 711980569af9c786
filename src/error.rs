use std::io;
use std::path::PathBuf;

use crate::scene::SceneId;
use crate::scenes::TestLogicKind;

/// Errors reported by the file utilities.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The size of a file could not be determined.
    #[error("failed to query size of {}: {source}", .path.display())]
    SizeQuery { path: PathBuf, source: io::Error },

    /// A file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Creating, truncating or writing a file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("failed to remove directory {}: {source}", .path.display())]
    RemoveDirectory { path: PathBuf, source: io::Error },

    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The process working directory could not be read or changed.
    #[error("working directory error: {0}")]
    WorkingDirectory(#[source] io::Error),
}

/// Errors reported by the scene registry and the test logic it drives.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene {0} is not registered")]
    UnknownScene(SceneId),

    #[error("scene {0} is already registered")]
    DuplicateScene(SceneId),

    /// State was set through the wrong test logic variant.
    #[error("scene {id} runs {actual:?} test logic, not {expected:?}")]
    KindMismatch {
        id: SceneId,
        expected: TestLogicKind,
        actual: TestLogicKind,
    },

    #[error("{kind:?} test logic has no state {state}")]
    UnknownState { kind: TestLogicKind, state: u32 },

    /// The scene producer refused to create a client scene.
    #[error("scene producer failed for scene {id}: {reason}")]
    Producer { id: SceneId, reason: String },

    #[error("{kind:?} test logic needs a framework configuration")]
    NeedsFrameworkConfig { kind: TestLogicKind },

    /// On-disk scene content did not decode into whole box records.
    #[error("scene content {} is corrupt: {len} bytes", .path.display())]
    CorruptContent { path: PathBuf, len: usize },

    #[error(transparent)]
    File(#[from] FileError),
}
