// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The split pipeline talks to the outside world through
// three seams:
//
//   DatasetSource     → where class folders and images come from
//   DestinationStore  → where copies go (existence checks + copy)
//   ProgressReporter  → where per-class results are announced
//
// Planning (sampling + naming) only ever sees these traits,
// so it can be tested against an in-memory store without
// creating a single file.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::domain::assignment::{ClassSummary, CopyAction, SplitReport};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Lists class directories and the image files inside them.
///
/// Implementations:
///   - FsDatasetSource → reads a real input root with std::fs
pub trait DatasetSource {
    /// Immediate class subdirectories, sorted by name.
    fn class_dirs(&self) -> Result<Vec<PathBuf>>;

    /// Image files directly inside `class_dir`, sorted by name.
    fn images(&self, class_dir: &Path) -> Result<Vec<PathBuf>>;
}

// ─── DestinationStore ─────────────────────────────────────────────────────────
/// The output side of a run.
///
/// Implementations:
///   - FsStore → real directories and metadata-preserving copies
///   - (tests) an in-memory set of paths
pub trait DestinationStore {
    /// Make sure `dir` exists. With `overwrite`, anything already
    /// there is removed first.
    fn prepare(&mut self, dir: &Path, overwrite: bool) -> Result<()>;

    /// Whether a file already occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Copy `source` to `destination`. The destination name has
    /// already been chosen to be free.
    fn copy(&mut self, source: &Path, destination: &Path) -> Result<()>;
}

// ─── ProgressReporter ─────────────────────────────────────────────────────────
/// Receives run events in processing order.
///
/// Implementations:
///   - ConsoleReporter → prints the operator-facing lines to stdout
pub trait ProgressReporter {
    /// A class folder had no images and was skipped.
    fn class_skipped(&mut self, label: &str);

    /// Dry-run only: a copy that a real run would perform.
    fn copy_planned(&mut self, action: &CopyAction);

    /// All copies for a class are done.
    fn class_finished(&mut self, summary: &ClassSummary);

    /// The whole run is done.
    fn finished(&mut self, report: &SplitReport);
}
