// ============================================================
// Layer 4 — Collision-Safe Output Naming
// ============================================================
// Every copy is renamed to keep its class:
//
//   cat/001.jpg  →  train/cat__001.jpg
//
// If that name is taken, a numeric suffix goes before the
// extension, counting up until a free name is found:
//
//   cat__001.jpg, cat__001_1.jpg, cat__001_2.jpg, ...
//
// "Taken" means either a file already exists in the
// destination, or an earlier copy in this same run has
// claimed the name. Tracking claims here (instead of only
// asking the filesystem) is what lets a dry run make exactly
// the decisions a real run would, even though it never
// creates the files.
//
// Without overwrite, repeated runs keep adding suffixed
// copies next to the old ones. That is expected.
//
// Reference: Rust Book §8 (Strings), §8 (Hash Sets)

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::domain::traits::DestinationStore;

/// Separator between the class label and the original file name
pub const LABEL_SEPARATOR: &str = "__";

/// `{label}__{file_name}`
pub fn prefixed_name(label: &str, file_name: &str) -> String {
    format!("{label}{LABEL_SEPARATOR}{file_name}")
}

/// Split a file name into (base, extension-with-dot).
///
/// Only the last dot counts, and a leading dot does not start an
/// extension: `a.b.jpg` → (`a.b`, `.jpg`), `.hidden` → (`.hidden`, ``),
/// `trailing.` → (`trailing.`, ``).
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => name.split_at(i),
        _ => (name, ""),
    }
}

/// The `attempt`-th candidate name: 0 is the name itself, n > 0 adds `_n`.
pub fn candidate_name(base: &str, ext: &str, attempt: usize) -> String {
    if attempt == 0 {
        format!("{base}{ext}")
    } else {
        format!("{base}_{attempt}{ext}")
    }
}

/// Picks final destination paths for one run.
#[derive(Debug, Default)]
pub struct NamePlanner {
    /// Destinations already handed out during this run
    claimed: HashSet<PathBuf>,
}

impl NamePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the first free `dir/{desired}` variant and claim it.
    pub fn resolve<D>(&mut self, dir: &Path, desired: &str, store: &D) -> PathBuf
    where
        D: DestinationStore + ?Sized,
    {
        let (base, ext) = split_extension(desired);

        let mut attempt = 0usize;
        loop {
            let candidate = dir.join(candidate_name(base, ext, attempt));

            if !self.claimed.contains(&candidate) && !store.exists(&candidate) {
                if attempt > 0 {
                    tracing::debug!(
                        "'{}' taken, using '{}'",
                        desired,
                        candidate.display()
                    );
                }
                self.claimed.insert(candidate.clone());
                return candidate;
            }

            attempt += 1;
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    /// Destination that only answers existence queries
    struct Existing(HashSet<PathBuf>);

    impl DestinationStore for Existing {
        fn prepare(&mut self, _dir: &Path, _overwrite: bool) -> Result<()> {
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }

        fn copy(&mut self, _source: &Path, destination: &Path) -> Result<()> {
            self.0.insert(destination.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_prefixed_name() {
        assert_eq!(prefixed_name("cat", "001.jpg"), "cat__001.jpg");
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("cat__a.jpg"), ("cat__a", ".jpg"));
        assert_eq!(split_extension("cat__a.b.png"), ("cat__a.b", ".png"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("trailing."), ("trailing.", ""));
    }

    #[test]
    fn test_candidate_names() {
        assert_eq!(candidate_name("cat__a", ".jpg", 0), "cat__a.jpg");
        assert_eq!(candidate_name("cat__a", ".jpg", 1), "cat__a_1.jpg");
        assert_eq!(candidate_name("cat__a", ".jpg", 12), "cat__a_12.jpg");
    }

    #[test]
    fn test_free_name_used_as_is() {
        let store = Existing(HashSet::new());
        let mut planner = NamePlanner::new();
        let dst = planner.resolve(Path::new("out/train"), "cat__a.jpg", &store);
        assert_eq!(dst, PathBuf::from("out/train/cat__a.jpg"));
    }

    #[test]
    fn test_existing_files_get_suffixes() {
        let store = Existing(
            ["out/train/cat__a.jpg", "out/train/cat__a_1.jpg"]
                .into_iter()
                .map(PathBuf::from)
                .collect(),
        );
        let mut planner = NamePlanner::new();
        let dst = planner.resolve(Path::new("out/train"), "cat__a.jpg", &store);
        assert_eq!(dst, PathBuf::from("out/train/cat__a_2.jpg"));
    }

    #[test]
    fn test_claims_within_a_run_count_as_taken() {
        // Nothing on "disk": collisions come only from earlier claims
        let store = Existing(HashSet::new());
        let mut planner = NamePlanner::new();
        let dir = Path::new("out/eval");

        let first  = planner.resolve(dir, "cat__a.jpg", &store);
        let second = planner.resolve(dir, "cat__a.jpg", &store);
        let third  = planner.resolve(dir, "cat__a.jpg", &store);

        assert_eq!(first,  PathBuf::from("out/eval/cat__a.jpg"));
        assert_eq!(second, PathBuf::from("out/eval/cat__a_1.jpg"));
        assert_eq!(third,  PathBuf::from("out/eval/cat__a_2.jpg"));
    }

    #[test]
    fn test_same_name_in_different_dirs_does_not_collide() {
        let store = Existing(HashSet::new());
        let mut planner = NamePlanner::new();
        let a = planner.resolve(Path::new("out/train"), "cat__a.jpg", &store);
        let b = planner.resolve(Path::new("out/eval"), "cat__a.jpg", &store);
        assert_eq!(a.file_name(), b.file_name());
    }
}
