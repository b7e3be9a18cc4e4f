// ============================================================
// Layer 1 — Console Reporter
// ============================================================
// Prints split progress to stdout, one line per event:
//
//   empty: no images, skipped.
//   [DRY] copy in/cat/001.jpg -> out/train/cat__001.jpg
//   cat: train=100 eval=10 (available=150)
//   Done.
//
// Diagnostics go through tracing (stderr), so stdout carries
// only these lines.

use crate::domain::assignment::{ClassSummary, CopyAction, SplitReport};
use crate::domain::traits::ProgressReporter;

#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

pub fn skip_line(label: &str) -> String {
    format!("{label}: no images, skipped.")
}

pub fn dry_run_line(action: &CopyAction) -> String {
    format!(
        "[DRY] copy {} -> {}",
        action.source.display(),
        action.destination.display()
    )
}

pub fn summary_line(s: &ClassSummary) -> String {
    format!(
        "{}: train={} eval={} (available={})",
        s.label, s.train, s.eval, s.available
    )
}

impl ProgressReporter for ConsoleReporter {
    fn class_skipped(&mut self, label: &str) {
        println!("{}", skip_line(label));
    }

    fn copy_planned(&mut self, action: &CopyAction) {
        println!("{}", dry_run_line(action));
    }

    fn class_finished(&mut self, summary: &ClassSummary) {
        println!("{}", summary_line(summary));
    }

    fn finished(&mut self, _report: &SplitReport) {
        println!("Done.");
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::SplitKind;
    use std::path::PathBuf;

    #[test]
    fn test_summary_line_format() {
        let s = ClassSummary { label: "cat".into(), train: 100, eval: 10, available: 150 };
        assert_eq!(summary_line(&s), "cat: train=100 eval=10 (available=150)");
    }

    #[test]
    fn test_skip_line_format() {
        assert_eq!(skip_line("empty"), "empty: no images, skipped.");
    }

    #[test]
    fn test_dry_run_line_format() {
        let action = CopyAction {
            split:       SplitKind::Eval,
            source:      PathBuf::from("in/dog/a.jpg"),
            destination: PathBuf::from("out/eval/dog__a.jpg"),
        };
        assert_eq!(dry_run_line(&action), "[DRY] copy in/dog/a.jpg -> out/eval/dog__a.jpg");
    }
}
