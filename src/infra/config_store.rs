// ============================================================
// Layer 6 — Split Config Persistence
// ============================================================
// Loads and saves SplitConfig as pretty JSON so a split can be
// re-run later with exactly the same seed and caps.
//
// Every field is optional in the file (#[serde(default)] on
// SplitConfig), so a minimal config is valid:
//
//   { "input_root": "data/flowers", "train_k": 50, "seed": 7 }
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::split_use_case::SplitConfig;

/// Read a SplitConfig from a JSON file.
pub fn load_config(path: &Path) -> Result<SplitConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid split config in '{}'", path.display()))?;

    tracing::debug!("Loaded split config from '{}'", path.display());
    Ok(cfg)
}

/// Write a SplitConfig as pretty JSON, creating parent directories.
pub fn save_config(path: &Path, cfg: &SplitConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::info!("Saved split config to '{}'", path.display());
    Ok(())
}
