//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Converts parsed blocks to a stable, human-readable text
//!   outline for `insta` string snapshots
//! - **`invariants`**: Runtime checks for parser correctness (every source line
//!   lands in exactly one block, inline nodes tile their text)
//!
//! ## Testing Strategy
//!
//! Parsing behaviour is pinned by outline snapshots rather than a separate
//! formal grammar. Outlines show block kinds, line spans and every inline span.

pub mod invariants;
pub mod outline;

pub use invariants::{check as invariants, check_inline};
pub use outline::{outline, outline_spans};
