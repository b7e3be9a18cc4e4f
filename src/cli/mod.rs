// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands off to Layer 2 (application).
//
// Two commands are supported:
//   1. `split` — copy a seeded sample of every class into
//                train/ and eval/
//   2. `scan`  — print per-class counts, copy nothing
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod reporter;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ScanArgs, SplitArgs};
use reporter::ConsoleReporter;

use crate::application::{scan_use_case::ScanUseCase, split_use_case::SplitUseCase};
use crate::infra::config_store::save_config;

#[derive(Parser, Debug)]
#[command(
    name = "dataset-splitter",
    version,
    about = "Split per-class image folders into seeded, size-capped train/eval sets."
)]
pub struct Cli {
    /// The subcommand to run (split or scan)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args) => run_split(args),
            Commands::Scan(args)  => run_scan(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    build_split(&args)?.execute(&mut ConsoleReporter::new())?;
    Ok(())
}

/// Resolve the config and, only once it is valid, save it if asked.
fn build_split(args: &SplitArgs) -> Result<SplitUseCase> {
    let cfg = args.to_config()?;
    cfg.validate()?;

    if let Some(path) = &args.save_config {
        save_config(path, &cfg)?;
    }

    Ok(SplitUseCase::new(cfg))
}

fn run_scan(args: ScanArgs) -> Result<()> {
    let summaries = ScanUseCase::new(args.dataset.resolve()?).execute()?;

    for s in &summaries {
        println!(
            "{}: available={} train={} eval={}",
            s.label, s.available, s.train, s.eval
        );
    }

    let available: usize = summaries.iter().map(|s| s.available).sum();
    let train: usize     = summaries.iter().map(|s| s.train).sum();
    let eval: usize      = summaries.iter().map(|s| s.eval).sum();
    println!(
        "{} classes: available={} train={} eval={}",
        summaries.len(),
        available,
        train,
        eval,
    );
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config_store::load_config;
    use std::fs;
    use tempfile::TempDir;

    fn split_args(argv: &[&str]) -> SplitArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Split(args) => args,
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let tmp    = TempDir::new().unwrap();
        let input  = tmp.path().join("bad.json");
        let output = tmp.path().join("saved.json");
        fs::write(&input, r#"{ "train_k": 0 }"#).unwrap();
        let input  = input.to_string_lossy().into_owned();
        let output = output.to_string_lossy().into_owned();

        let args = split_args(&[
            "dataset-splitter", "split",
            "--config", input.as_str(),
            "--save-config", output.as_str(),
        ]);

        let err = build_split(&args).err().unwrap();
        assert!(err.to_string().contains("train_k"));
        assert!(!tmp.path().join("saved.json").exists());
    }

    #[test]
    fn test_valid_config_is_saved() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("saved.json");
        let path_str = path.to_string_lossy().into_owned();

        let args = split_args(&[
            "dataset-splitter", "split",
            "--seed", "5",
            "--save-config", path_str.as_str(),
        ]);

        build_split(&args).unwrap();
        assert_eq!(load_config(&path).unwrap().seed, 5);
    }
}
