// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `split` and `scan`, and their
// flags. Settings are layered, lowest precedence first:
//
//   SplitConfig::default()  →  --config file.json  →  flags
//
// so a saved config can be re-run with a single flag changed.
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive documentation

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::split_use_case::SplitConfig;
use crate::infra::config_store::load_config;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a seeded, capped sample of every class into train/ and eval/
    Split(SplitArgs),

    /// Show per-class image counts and what a split would take, without copying
    Scan(ScanArgs),
}

/// Settings shared by `split` and `scan`.
/// Flags left out keep the value from --config (or the default).
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// JSON file with a saved split config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory whose subdirectories are the classes [default: .]
    #[arg(long)]
    pub input_root: Option<PathBuf>,

    /// Where train/ and eval/ are created [default: the input root]
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Maximum images per class copied to train [default: 100]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub train_k: Option<u64>,

    /// Maximum images per class copied to eval [default: 10]
    #[arg(long)]
    pub eval_k: Option<usize>,
}

impl DatasetArgs {
    /// Merge defaults, the config file and explicit flags.
    pub fn resolve(&self) -> Result<SplitConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None       => SplitConfig::default(),
        };

        if let Some(p) = &self.input_root {
            cfg.input_root = p.clone();
        }
        if let Some(p) = &self.output_root {
            cfg.output_root = Some(p.clone());
        }
        if let Some(k) = self.train_k {
            cfg.train_k = usize::try_from(k)?;
        }
        if let Some(k) = self.eval_k {
            cfg.eval_k = k;
        }

        Ok(cfg)
    }
}

/// All arguments for the `split` command.
#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Seed of the shuffle shared by all classes [default: 74]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep existing train/ and eval/ contents (new copies get _N suffixes)
    #[arg(long, conflicts_with = "overwrite")]
    pub keep_existing: bool,

    /// Clear existing train/ and eval/ first (the default)
    #[arg(long)]
    pub overwrite: bool,

    /// Print planned copies instead of copying
    #[arg(long)]
    pub dry_run: bool,

    /// Write split_manifest.json into the output root
    #[arg(long)]
    pub manifest: bool,

    /// Save the effective config to this JSON file before running
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

impl SplitArgs {
    /// Build the effective SplitConfig for this invocation.
    pub fn to_config(&self) -> Result<SplitConfig> {
        let mut cfg = self.dataset.resolve()?;

        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if self.keep_existing {
            cfg.overwrite = false;
        }
        if self.overwrite {
            cfg.overwrite = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.manifest {
            cfg.write_manifest = true;
        }

        Ok(cfg)
    }
}

/// All arguments for the `scan` command
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}
