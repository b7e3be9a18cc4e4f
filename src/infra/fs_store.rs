// ============================================================
// Layer 6 — Filesystem Destination Store
// ============================================================
// The real output side of a split:
//
//   prepare(dir, overwrite)
//     overwrite = true  → remove the whole tree, recreate empty
//     overwrite = false → create if missing, keep what is there
//
//   exists(path)         → is the candidate name already taken
//                          (any entry, even a broken symlink)
//
//   copy(src, dst)       → contents + permissions (fs::copy),
//                          then modified / accessed times
//
// Timestamps are best effort: some platforms or read-only
// copies refuse them, which is logged and otherwise ignored.
// Everything else is a hard error carrying the offending path.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs / std::fs::FileTimes documentation

use anyhow::{Context, Result};
use std::{
    fs::{self, File, FileTimes},
    path::Path,
};

use crate::domain::traits::DestinationStore;

/// DestinationStore backed by std::fs.
#[derive(Debug, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl DestinationStore for FsStore {
    fn prepare(&mut self, dir: &Path, overwrite: bool) -> Result<()> {
        prepare_dir(dir, overwrite)
    }

    /// Any directory entry counts, including a dangling symlink,
    /// so a copy never writes through a link left in the output.
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn copy(&mut self, source: &Path, destination: &Path) -> Result<()> {
        copy_preserving(source, destination)
    }
}

/// Ensure `dir` exists, emptying it first when `overwrite` is set.
/// A missing directory is fine in both modes.
pub fn prepare_dir(dir: &Path, overwrite: bool) -> Result<()> {
    if overwrite && dir.exists() {
        tracing::info!("Removing existing '{}'", dir.display());
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove '{}'", dir.display()))?;
    }

    // create_dir_all is a no-op when the directory is already there
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;

    Ok(())
}

/// Copy a file and carry its permissions and timestamps over.
pub fn copy_preserving(source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination).with_context(|| {
        format!(
            "Failed to copy '{}' to '{}'",
            source.display(),
            destination.display()
        )
    })?;

    if let Err(e) = copy_times(source, destination) {
        tracing::warn!(
            "Copied '{}' but could not keep its timestamps: {:#}",
            destination.display(),
            e
        );
    }

    Ok(())
}

fn copy_times(source: &Path, destination: &Path) -> Result<()> {
    let meta = fs::metadata(source)?;

    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }

    // Read-only handle: the copy may have inherited read-only permissions
    File::open(destination)?.set_times(times)?;
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("out").join("train");
        prepare_dir(&dir, true).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_prepare_with_overwrite_empties_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("train");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("old.jpg"), b"old").unwrap();

        prepare_dir(&dir, true).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_prepare_without_overwrite_keeps_contents() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("eval");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("old.jpg"), b"old").unwrap();

        prepare_dir(&dir, false).unwrap();

        assert!(dir.join("old.jpg").exists());
    }

    #[test]
    fn test_copy_keeps_contents_and_mtime() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.jpg");
        let dst = tmp.path().join("cat__a.jpg");
        fs::write(&src, b"pixels").unwrap();

        // Push the source's mtime into the past so a fresh copy would differ
        let past = SystemTime::now() - Duration::from_secs(86_400);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        copy_preserving(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"pixels");
        let src_mtime = fs::metadata(&src).unwrap().modified().unwrap();
        let dst_mtime = fs::metadata(&dst).unwrap().modified().unwrap();
        assert_eq!(src_mtime, dst_mtime);
    }

    #[test]
    fn test_copy_missing_source_names_path() {
        let tmp = TempDir::new().unwrap();
        let err = copy_preserving(&tmp.path().join("gone.jpg"), &tmp.path().join("x.jpg"))
            .unwrap_err();
        assert!(err.to_string().contains("gone.jpg"));
    }

    #[test]
    fn test_store_exists() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new();
        let p = tmp.path().join("cat__a.jpg");
        assert!(!store.exists(&p));
        fs::write(&p, b"x").unwrap();
        assert!(store.exists(&p));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_counts_as_taken() {
        let tmp   = TempDir::new().unwrap();
        let store = FsStore::new();
        let link  = tmp.path().join("cat__a.jpg");
        std::os::unix::fs::symlink(tmp.path().join("elsewhere.jpg"), &link).unwrap();

        assert!(!link.exists());
        assert!(store.exists(&link));
    }
}
