// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns that touch the real filesystem on behalf of the
// other layers:
//
//   fs_store.rs     — DestinationStore over std::fs:
//                     directory preparation (optionally
//                     destructive), existence checks and
//                     metadata-preserving copies.
//
//   config_store.rs — SplitConfig as JSON on disk, so a split
//                     can be repeated with the same seed.
//
//   manifest.rs     — optional split_manifest.json recording
//                     every source → destination of a run.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Real directories and copies
pub mod fs_store;

/// SplitConfig load / save
pub mod config_store;

/// Run manifest writer
pub mod manifest;
