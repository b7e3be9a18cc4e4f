// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Turns an input root into a plan of copies:
//
//   input_root/
//       │
//       ▼
//   FsDatasetSource   → sorted class folders, sorted image files
//       │
//       ▼
//   sample_split      → seeded shuffle, disjoint train / eval slices
//       │
//       ▼
//   NamePlanner       → class-prefixed, collision-free destinations
//
// Each module is responsible for exactly one step and can be
// tested on its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Enumerates class folders and image files on disk
pub mod scanner;

/// Seeded shuffle and train/eval slicing
pub mod sampler;

/// Class-prefixed, suffix-on-collision output names
pub mod naming;
