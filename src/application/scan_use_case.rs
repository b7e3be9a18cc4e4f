// ============================================================
// Layer 2 — ScanUseCase
// ============================================================
// Read-only inventory of an input root: which classes exist,
// how many images each has, and how many a split with the
// configured caps would place in train and eval.
//
// Nothing is created, cleared or copied, and the generator is
// never touched (counts do not depend on the seed).
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};

use crate::application::split_use_case::SplitConfig;
use crate::data::{sampler::split_sizes, scanner::FsDatasetSource};
use crate::domain::{
    assignment::{ClassSummary, SplitKind},
    class_folder::label_for,
    traits::DatasetSource,
};

pub struct ScanUseCase {
    config: SplitConfig,
}

impl ScanUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Inventory the real input root.
    pub fn execute(&self) -> Result<Vec<ClassSummary>> {
        let cfg = &self.config;
        let source = FsDatasetSource::new(&cfg.input_root)
            .excluding([cfg.split_dir(SplitKind::Train), cfg.split_dir(SplitKind::Eval)]);

        tracing::info!("Scanning '{}'", source.root().display());
        self.inventory(&source)
    }

    /// Per-class counts a split would produce, in processing order.
    /// Empty classes are included with zero counts.
    pub fn inventory<S>(&self, source: &S) -> Result<Vec<ClassSummary>>
    where
        S: DatasetSource + ?Sized,
    {
        let cfg = &self.config;
        cfg.validate()?;

        let class_dirs = source.class_dirs()?;
        if class_dirs.is_empty() {
            bail!("No class folders found in: {}", cfg.input_root.display());
        }

        class_dirs
            .iter()
            .map(|dir| {
                let available     = source.images(dir)?.len();
                let (train, eval) = split_sizes(available, cfg.train_k, cfg.eval_k);
                Ok(ClassSummary { label: label_for(dir), train, eval, available })
            })
            .collect()
    }
}
