// ============================================================
// Layer 4 — Dataset Scanner
// ============================================================
// Enumerates the input root with std::fs:
//
//   input_root/
//     cat/        ← class folder (immediate subdirectory)
//       001.jpg   ← image (extension in the allow-set)
//       002.PNG   ← image (case-insensitive)
//       info.txt  ← skipped silently
//       raw/      ← skipped, never recursed
//     dog/
//     labels.csv  ← not a directory, not a class
//
// Both lists are sorted by file name so that the order in
// which classes consume random draws is reproducible.
//
// Output directories that live inside the input root (the
// usual case when output_root == input_root) are excluded
// so a previous run's train/ and eval/ never become classes.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir documentation

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::class_folder::has_image_extension;
use crate::domain::traits::DatasetSource;

/// Reads class folders and images from a directory on disk.
/// Implements the DatasetSource trait from Layer 3.
pub struct FsDatasetSource {
    /// The input root whose subdirectories are classes
    root: PathBuf,

    /// Directories never reported as classes
    excluded: Vec<PathBuf>,
}

impl FsDatasetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:     root.into(),
            excluded: Vec::new(),
        }
    }

    /// Skip these directories if they turn up among the classes.
    pub fn excluding<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.excluded.extend(dirs.into_iter().map(Into::into));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonical forms of the excluded directories that exist right now.
    /// A directory that does not exist cannot be listed, so it needs no entry.
    fn excluded_canonical(&self) -> Vec<PathBuf> {
        self.excluded
            .iter()
            .filter_map(|p| fs::canonicalize(p).ok())
            .collect()
    }
}

impl DatasetSource for FsDatasetSource {
    fn class_dirs(&self) -> Result<Vec<PathBuf>> {
        let excluded = self.excluded_canonical();
        let mut dirs = Vec::new();

        for entry in fs::read_dir(&self.root)
            .with_context(|| format!("Cannot read directory '{}'", self.root.display()))?
        {
            let entry = entry
                .with_context(|| format!("Cannot list '{}'", self.root.display()))?;
            let path  = entry.path();

            // is_dir() follows symlinks, so a linked class folder still counts
            if !path.is_dir() {
                continue;
            }

            if !excluded.is_empty() {
                if let Ok(canonical) = fs::canonicalize(&path) {
                    if excluded.contains(&canonical) {
                        tracing::debug!("Ignoring output directory '{}'", path.display());
                        continue;
                    }
                }
            }

            dirs.push(path);
        }

        sort_by_file_name(&mut dirs);
        tracing::debug!("Found {} class folders in '{}'", dirs.len(), self.root.display());
        Ok(dirs)
    }

    fn images(&self, class_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut images = Vec::new();

        for entry in fs::read_dir(class_dir)
            .with_context(|| format!("Cannot read directory '{}'", class_dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Cannot list '{}'", class_dir.display()))?;
            let path  = entry.path();

            if path.is_file() && has_image_extension(&path) {
                images.push(path);
            }
        }

        sort_by_file_name(&mut images);
        Ok(images)
    }
}

/// Sort paths by their final component (byte order).
fn sort_by_file_name(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}
