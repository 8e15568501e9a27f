//! Atomic I/O operations with file locking

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// The temp file is held under an exclusive advisory lock while written.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    let written = temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, returning `None` when the file does not exist.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    match fs::read_to_string(path.to_native()) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path.to_native(), e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create a directory and all of its parents.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    fs::create_dir_all(path.to_native()).map_err(|e| Error::io(path.to_native(), e))
}

/// Remove a file, or a directory tree.
///
/// Symlinks are removed without following them. A missing path is not an error.
pub fn remove_path(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    let metadata = match fs::symlink_metadata(&native) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io(&native, e)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(&native)
    } else {
        fs::remove_file(&native)
    };
    removed.map_err(|e| Error::io(&native, e))
}

/// List regular files directly inside `dir` with the given extension.
///
/// Returns an empty list when `dir` is missing or is not a directory.
/// Entries are sorted by path.
pub fn list_files(dir: &NormalizedPath, extension: &str) -> Result<Vec<NormalizedPath>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir.to_native()).map_err(|e| Error::io(dir.to_native(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir.to_native(), e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        let path = NormalizedPath::new(entry.path());
        if path.extension() == Some(extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// List sub-directories directly inside `dir`, sorted by path.
pub fn list_dirs(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir.to_native()).map_err(|e| Error::io(dir.to_native(), e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir.to_native(), e))?;
        if entry.path().is_dir() {
            dirs.push(NormalizedPath::new(entry.path()));
        }
    }

    dirs.sort();
    Ok(dirs)
}
