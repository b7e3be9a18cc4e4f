// ============================================================
// Layer 6 — Split Manifest
// ============================================================
// Optional record of a real run, written to
// {output_root}/split_manifest.json:
//
//   {
//     "config":  { ...effective SplitConfig... },
//     "classes": [ { "label": "cat", "train": 100, "eval": 10, "available": 150 } ],
//     "skipped": [ "empty_class" ],
//     "copies":  [ { "split": "train", "source": "...", "destination": "..." } ]
//   }
//
// With it, the exact assignment of a run can be audited
// without relying on reproducing the seed. Dry runs never
// write it, since they must not create files.
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::split_use_case::SplitConfig;
use crate::domain::assignment::{ClassSummary, CopyAction, SplitReport};

pub const MANIFEST_FILE_NAME: &str = "split_manifest.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct SplitManifest {
    pub config:  SplitConfig,
    pub classes: Vec<ClassSummary>,
    pub skipped: Vec<String>,
    pub copies:  Vec<CopyAction>,
}

impl SplitManifest {
    pub fn new(config: &SplitConfig, report: &SplitReport) -> Self {
        Self {
            config:  config.clone(),
            classes: report.classes.clone(),
            skipped: report.skipped.clone(),
            copies:  report.actions.clone(),
        }
    }
}

/// Write the manifest into `output_root` and return its path.
pub fn write_manifest(output_root: &Path, manifest: &SplitManifest) -> Result<PathBuf> {
    let path = output_root.join(MANIFEST_FILE_NAME);
    let json = serde_json::to_string_pretty(manifest)?;

    fs::write(&path, json)
        .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

    tracing::info!(
        "Wrote manifest with {} copies to '{}'",
        manifest.copies.len(),
        path.display()
    );
    Ok(path)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::SplitKind;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_written_and_readable() {
        let tmp = TempDir::new().unwrap();
        let report = SplitReport {
            classes: vec![ClassSummary { label: "dog".into(), train: 1, eval: 0, available: 1 }],
            skipped: vec!["empty".into()],
            actions: vec![CopyAction {
                split:       SplitKind::Train,
                source:      PathBuf::from("in/dog/a.jpg"),
                destination: PathBuf::from("out/train/dog__a.jpg"),
            }],
        };

        let manifest = SplitManifest::new(&SplitConfig::default(), &report);
        let path = write_manifest(tmp.path(), &manifest).unwrap();
        assert_eq!(path, tmp.path().join(MANIFEST_FILE_NAME));

        let back: SplitManifest =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.classes, report.classes);
        assert_eq!(back.skipped, vec!["empty".to_string()]);
        assert_eq!(back.copies[0].split, SplitKind::Train);
    }
}
