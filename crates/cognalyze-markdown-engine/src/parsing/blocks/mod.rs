//! # Block Parsing
//!
//! Two-phase block parsing over a single left-to-right scan.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is trimmed and classified
//!    into a `LineClass` of local facts (structural prefix, pipe presence)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` buffers list items,
//!    holds one line of lookahead for table detection, and emits `BlockNode`s
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks come out in source line order and line spans never overlap
//! - A list holds only adjacent items of one kind
//! - A pipe line is a table header only when the next line is a separator row
//! - Every line ends up in exactly one block; nothing is dropped

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineLeaf, MarkdownLineClassifier};
pub use kinds::{Alignment, ListMarker};
pub use types::{BlockKind, BlockNode};
