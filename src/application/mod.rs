// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one end-to-end run of the experiment.
//
// Rules for this layer:
//   - No feature math here (that's Layer 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The end-to-end feature-generation workflow
pub mod run_use_case;
