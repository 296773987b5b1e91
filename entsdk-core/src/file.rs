//! Output file helpers.

use std::{
    fs,
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;

/// The step of [`write_file_atomic`] that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriteStage {
    #[error("create directory")]
    CreateDirectory,
    #[error("open")]
    Open,
    #[error("write")]
    Write,
    #[error("close")]
    Close,
    #[error("rename")]
    Rename,
}

/// Error from [`write_file_atomic`].
#[derive(Debug, Error)]
#[error("failed to {stage}: {source}")]
pub struct WriteError {
    pub stage: WriteStage,
    #[source]
    pub source: io::Error,
}

fn at(stage: WriteStage) -> impl FnOnce(io::Error) -> WriteError {
    move |source| WriteError { stage, source }
}

/// Write `content` to `path`, creating every missing parent directory.
///
/// The content goes to a uniquely named temporary file in the target
/// directory and is renamed over the target once synced, so a failed write
/// never leaves a truncated file behind. The temporary file is removed on
/// failure.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(at(WriteStage::CreateDirectory))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(at(WriteStage::Open))?;
    tmp.write_all(content.as_bytes())
        .map_err(at(WriteStage::Write))?;
    tmp.as_file().sync_all().map_err(at(WriteStage::Close))?;
    tmp.persist(path)
        .map(drop)
        .map_err(|e| at(WriteStage::Rename)(e.error))
}

/// Split any backslash-separated segments so Windows-style output paths
/// resolve to the same directories on every platform.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => match segment.to_str() {
                Some(s) if s.contains('\\') => {
                    out.extend(s.split('\\').filter(|part| !part.is_empty()));
                }
                _ => out.push(segment),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("Avatar.cs");

        write_file_atomic(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_and_leaves_no_temp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("EntityTypes.h");

        write_file_atomic(&path, "first").unwrap();
        write_file_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_below_a_file_fails_at_create_directory() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = write_file_atomic(&blocker.join("out.cs"), "y").unwrap_err();
        assert_eq!(err.stage, WriteStage::CreateDirectory);
        assert!(err.to_string().starts_with("failed to create directory"));
    }

    #[test]
    fn test_write_keeps_unrelated_tmp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Avatar.h");
        let neighbour = temp.path().join("Avatar.h.tmp");
        fs::write(&neighbour, "user data").unwrap();

        write_file_atomic(&path, "generated").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "generated");
        assert_eq!(fs::read_to_string(&neighbour).unwrap(), "user data");
    }

    #[test]
    fn test_failed_rename_cleans_up() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Avatar.h");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_file_atomic(&path, "generated").unwrap_err();

        assert_eq!(err.stage, WriteStage::Rename);
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_stage_messages() {
        assert_eq!(WriteStage::CreateDirectory.to_string(), "create directory");
        let err = WriteError {
            stage: WriteStage::Close,
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "failed to close: disk full");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("out\\unity\\sdk")),
            PathBuf::from("out").join("unity").join("sdk")
        );
        assert_eq!(
            normalize_path(Path::new("/tmp/sdk")),
            PathBuf::from("/tmp/sdk")
        );
    }
}
