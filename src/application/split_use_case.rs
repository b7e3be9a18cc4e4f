// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Orchestrates one split run, in order:
//
//   Step 1: Seed the generator (once, for the whole run)
//   Step 2: Enumerate class folders       (Layer 4 - data)
//           → fatal if there are none, before anything is cleared
//   Step 3: Prepare train/ and eval/      (Layer 6 - infra)
//   Step 4: For each class, in sorted order:
//             list images, sample, plan names, copy, report
//   Step 5: Report completion, optionally write the manifest
//
// There is no rollback. If a copy fails, the files copied so
// far stay where they are and the error ends the run.
//
// Reproducibility depends on the seed AND the class order:
// every class draws from the same generator, so class B's
// permutation depends on how many draws class A consumed.
// Classes must stay sequential and sorted.
//
// Reference: Clean Architecture pattern
//            Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{
    naming::{prefixed_name, NamePlanner},
    sampler::sample_split,
    scanner::FsDatasetSource,
};
use crate::domain::{
    assignment::{ClassSummary, CopyAction, SplitKind, SplitReport},
    class_folder::{label_for, ClassFolder},
    traits::{DatasetSource, DestinationStore, ProgressReporter},
};
use crate::infra::{
    fs_store::FsStore,
    manifest::{write_manifest, SplitManifest},
};

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything a run needs, fixed before it starts.
// Serialisable so it can be loaded from / saved to JSON;
// missing fields take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Directory whose immediate subdirectories are the classes
    pub input_root: PathBuf,

    /// Parent of train/ and eval/. None means "same as input_root".
    pub output_root: Option<PathBuf>,

    /// Maximum images per class in train (must be at least 1)
    pub train_k: usize,

    /// Maximum images per class in eval (0 disables eval)
    pub eval_k: usize,

    /// Seed of the single generator shared by all classes
    pub seed: u64,

    /// Remove existing train/ and eval/ before copying
    pub overwrite: bool,

    /// Announce copies instead of performing them
    pub dry_run: bool,

    /// Write split_manifest.json into output_root after a real run
    pub write_manifest: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input_root:     PathBuf::from("."),
            output_root:    None,
            train_k:        100,
            eval_k:         10,
            seed:           74,
            overwrite:      true,
            dry_run:        false,
            write_manifest: false,
        }
    }
}

impl SplitConfig {
    /// Reject settings that can never produce a valid split.
    pub fn validate(&self) -> Result<()> {
        if self.train_k == 0 {
            bail!("train_k must be at least 1");
        }
        Ok(())
    }

    /// Effective output root
    pub fn output_root(&self) -> &Path {
        self.output_root.as_deref().unwrap_or(self.input_root.as_path())
    }

    /// `output_root/train` or `output_root/eval`
    pub fn split_dir(&self, split: SplitKind) -> PathBuf {
        self.output_root().join(split.dir_name())
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Run the split against the real filesystem.
    pub fn execute<P>(&self, reporter: &mut P) -> Result<SplitReport>
    where
        P: ProgressReporter + ?Sized,
    {
        let cfg = &self.config;

        tracing::info!(
            "Splitting '{}' into '{}' (train_k={}, eval_k={}, seed={}, overwrite={}, dry_run={})",
            cfg.input_root.display(),
            cfg.output_root().display(),
            cfg.train_k,
            cfg.eval_k,
            cfg.seed,
            cfg.overwrite,
            cfg.dry_run,
        );

        // train/ and eval/ may sit inside the input root; never treat them as classes
        let source = FsDatasetSource::new(&cfg.input_root)
            .excluding([cfg.split_dir(SplitKind::Train), cfg.split_dir(SplitKind::Eval)]);
        let mut store = FsStore::new();

        let report = self.run(&source, &mut store, reporter)?;

        if cfg.write_manifest {
            if cfg.dry_run {
                tracing::info!("Dry run: manifest not written");
            } else {
                write_manifest(cfg.output_root(), &SplitManifest::new(cfg, &report))?;
            }
        }

        Ok(report)
    }

    /// Run the split against any source / store pair.
    pub fn run<S, D, P>(&self, source: &S, store: &mut D, reporter: &mut P) -> Result<SplitReport>
    where
        S: DatasetSource + ?Sized,
        D: DestinationStore + ?Sized,
        P: ProgressReporter + ?Sized,
    {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1: One generator for the whole run ───────────────────────────
        let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);

        // ── Step 2: Enumerate classes before touching any output ─────────────
        let class_dirs = source.class_dirs()?;
        if class_dirs.is_empty() {
            bail!("No class folders found in: {}", cfg.input_root.display());
        }
        tracing::info!("Found {} class folders", class_dirs.len());

        // ── Step 3: Prepare both output roots ────────────────────────────────
        let train_root = cfg.split_dir(SplitKind::Train);
        let eval_root  = cfg.split_dir(SplitKind::Eval);
        store.prepare(&train_root, cfg.overwrite)?;
        store.prepare(&eval_root, cfg.overwrite)?;

        // ── Step 4: Classes in sorted order, sharing `rng` ────────────────────
        let mut planner = NamePlanner::new();
        let mut report  = SplitReport::default();

        for dir in class_dirs {
            let class = ClassFolder::new(label_for(&dir), &dir, source.images(&dir)?);

            if class.is_empty() {
                tracing::debug!("No images in '{}'", class.path.display());
                reporter.class_skipped(&class.label);
                report.skipped.push(class.label);
                continue;
            }

            let actions = self.plan_class(&class, &mut rng, &mut planner, &*store);

            for action in &actions {
                if cfg.dry_run {
                    reporter.copy_planned(action);
                } else {
                    store.copy(&action.source, &action.destination)?;
                }
            }

            let summary = ClassSummary {
                label:     class.label.clone(),
                train:     actions.iter().filter(|a| a.split == SplitKind::Train).count(),
                eval:      actions.iter().filter(|a| a.split == SplitKind::Eval).count(),
                available: class.available(),
            };
            tracing::debug!("{}: {} images left unused", summary.label, summary.unused());
            reporter.class_finished(&summary);

            report.classes.push(summary);
            report.actions.extend(actions);
        }

        // ── Step 5: Done ─────────────────────────────────────────────────────
        tracing::info!(
            "{} files to train, {} to eval, {} classes skipped",
            report.total(SplitKind::Train),
            report.total(SplitKind::Eval),
            report.skipped.len(),
        );
        reporter.finished(&report);

        Ok(report)
    }

    /// Sample one class and pick a destination for every selected image.
    /// Train copies are planned before eval copies.
    fn plan_class<R, D>(
        &self,
        class:   &ClassFolder,
        rng:     &mut R,
        planner: &mut NamePlanner,
        store:   &D,
    ) -> Vec<CopyAction>
    where
        R: Rng + ?Sized,
        D: DestinationStore + ?Sized,
    {
        let cfg = &self.config;
        let (train, eval) = sample_split(class.images.clone(), cfg.train_k, cfg.eval_k, rng);

        let mut actions = Vec::with_capacity(train.len() + eval.len());

        for (split, files) in [(SplitKind::Train, train), (SplitKind::Eval, eval)] {
            let dir = cfg.split_dir(split);

            for source in files {
                let file_name = source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let desired     = prefixed_name(&class.label, &file_name);
                let destination = planner.resolve(&dir, &desired, store);

                actions.push(CopyAction { split, source, destination });
            }
        }

        actions
    }
}
