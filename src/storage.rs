//! Atomic persistence for generated artifacts.
//!
//! Output is rendered fully in memory and written through a temporary file
//! in the target directory, so a failed operation never leaves a partial
//! file behind.

use std::{
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

/// Writes `bytes` to `path` atomically.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or
/// renamed into place. The target path is untouched on failure.
pub(crate) fn persist_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.persist(path).map_err(|error| error.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::persist_atomic;

    #[test]
    fn writes_bytes_to_target_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.md");
        persist_atomic(&path, b"content").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"content");
    }

    #[test]
    fn missing_directory_is_an_error_and_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("artifact.md");
        assert!(persist_atomic(&path, b"content").is_err());
        assert!(!path.exists());
    }
}
