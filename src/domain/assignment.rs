// ============================================================
// Layer 3 — Split Assignment Types
// ============================================================
// Describes the outcome of splitting one class:
//   - which split (train / eval) a file goes to
//   - the planned copy (source → final destination path)
//   - the per-class counts reported to the operator
//
// These are the "plan" half of the pipeline. Nothing here
// touches the filesystem; the application layer hands the
// planned CopyActions to a DestinationStore to execute.
//
// Reference: Rust Book §6 (Enums), §5 (Structs)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The two output sets of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitKind {
    Train,
    Eval,
}

impl SplitKind {
    /// Name of the output directory under `output_root`
    pub fn dir_name(self) -> &'static str {
        match self {
            SplitKind::Train => "train",
            SplitKind::Eval  => "eval",
        }
    }
}

/// A single planned copy. The destination is final: the
/// collision check has already been done by the NamePlanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyAction {
    pub split:       SplitKind,
    pub source:      PathBuf,
    pub destination: PathBuf,
}

/// Counts reported for a class once its copies are done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub label:     String,
    pub train:     usize,
    pub eval:      usize,
    pub available: usize,
}

impl ClassSummary {
    /// Images neither in train nor in eval
    pub fn unused(&self) -> usize {
        self.available.saturating_sub(self.train + self.eval)
    }
}

/// Everything a completed run decided, in processing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitReport {
    /// Classes that had at least one image
    pub classes: Vec<ClassSummary>,

    /// Labels of classes that had no images
    pub skipped: Vec<String>,

    /// Every copy performed (or announced, under dry-run)
    pub actions: Vec<CopyAction>,
}

impl SplitReport {
    pub fn total(&self, split: SplitKind) -> usize {
        self.actions.iter().filter(|a| a.split == split).count()
    }
}
