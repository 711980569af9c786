use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Path-identified handle to a filesystem entry
/// Holds no state beyond the path; every query goes to the OS
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn is_directory(&self) -> bool {
        self.path.is_dir()
    }

    /// Size of a regular file in bytes
    /// Directories and missing entries are errors
    pub fn size_in_bytes(&self) -> io::Result<u64> {
        let metadata = std::fs::metadata(&self.path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", self.path.display()),
            ));
        }
        Ok(metadata.len())
    }

    /// Child entry below this one
    pub fn join(&self, name: impl AsRef<Path>) -> File {
        File::new(self.path.join(name))
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

impl AsRef<Path> for File {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<&str> for File {
    fn from(path: &str) -> Self {
        File::new(path)
    }
}

impl From<PathBuf> for File {
    fn from(path: PathBuf) -> Self {
        File::new(path)
    }
}

impl From<&Path> for File {
    fn from(path: &Path) -> Self {
        File::new(path)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
