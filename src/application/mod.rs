// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
// splitting a dataset, or inventorying it first.
//
// Rules for this layer:
//   - No printing here (that's Layer 1, via ProgressReporter)
//   - No direct std::fs calls (Layer 4 and 6 do that)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The split workflow and its configuration
pub mod split_use_case;

// The read-only inventory workflow
pub mod scan_use_case;
