// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing a dataset
// split: class folders, split kinds, planned copies, summaries.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing
//   - Only plain types and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A class label with its image files
pub mod class_folder;

// Split kinds, planned copies, per-class summaries
pub mod assignment;

// Seams implemented by the data, infra and cli layers
pub mod traits;
