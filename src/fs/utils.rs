use std::io::Write;

use super::chunked::{read_to_size, ReadOutcome};
use super::file::File;
use crate::error::FileError;

/// Create a directory and any missing ancestors
/// Succeeds when the full path exists as a directory afterwards
pub fn create_directories(directory: &File) -> Result<(), FileError> {
    std::fs::create_dir_all(directory.path()).map_err(|source| FileError::CreateDirectory {
        path: directory.path().to_path_buf(),
        source,
    })?;

    if !directory.is_directory() {
        return Err(FileError::NotADirectory {
            path: directory.path().to_path_buf(),
        });
    }
    Ok(())
}

/// Remove a directory together with its contents
pub fn remove_directory(directory: &File) -> Result<(), FileError> {
    std::fs::remove_dir_all(directory.path()).map_err(|source| FileError::RemoveDirectory {
        path: directory.path().to_path_buf(),
        source,
    })
}

/// Whole file content as text
/// A missing or unreadable file yields empty text; check `File::exists` to tell them apart
pub fn read_all_text(file: &File) -> String {
    match std::fs::read(file.path()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::debug!("no text read from {}: {}", file, e);
            String::new()
        }
    }
}

/// Replace the file content with `content`
pub fn write_all_text(file: &File, content: &str) -> Result<(), FileError> {
    write_all_bytes(file, content.as_bytes())
}

/// Replace the file content with `buffer`
pub fn write_all_bytes(file: &File, buffer: &[u8]) -> Result<(), FileError> {
    let mut handle = std::fs::File::create(file.path()).map_err(|source| FileError::Open {
        path: file.path().to_path_buf(),
        source,
    })?;

    handle
        .write_all(buffer)
        .and_then(|_| handle.flush())
        .map_err(|source| FileError::Write {
            path: file.path().to_path_buf(),
            source,
        })
}

/// Whole file content as bytes
///
/// The buffer is sized from the file size up front and filled by repeated reads.
/// A failed size query returns before the file is opened. Once the file is open,
/// early loop exits are reported through the outcome rather than as errors.
pub fn read_all_bytes(file: &File) -> Result<ReadOutcome, FileError> {
    let size = file.size_in_bytes().map_err(|source| FileError::SizeQuery {
        path: file.path().to_path_buf(),
        source,
    })?;

    let mut handle = std::fs::File::open(file.path()).map_err(|source| FileError::Open {
        path: file.path().to_path_buf(),
        source,
    })?;

    let outcome = read_to_size(&mut handle, size as usize);
    if !outcome.is_complete() {
        log::debug!(
            "read of {} stopped at {} of {} bytes ({:?})",
            file,
            outcome.bytes.len(),
            size,
            outcome.exit
        );
    }
    Ok(outcome)
}

pub fn current_working_directory() -> Result<File, FileError> {
    std::env::current_dir()
        .map(File::from)
        .map_err(FileError::WorkingDirectory)
}

/// Change the process working directory
/// The target must be an existing directory
pub fn set_current_working_directory(directory: &File) -> Result<(), FileError> {
    if !directory.is_directory() {
        return Err(FileError::NotADirectory {
            path: directory.path().to_path_buf(),
        });
    }
    std::env::set_current_dir(directory.path()).map_err(FileError::WorkingDirectory)
}
