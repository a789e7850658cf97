//! # Inline Formatting
//!
//! Cursor-based inline formatting in three precedence passes.
//!
//! ## Architecture
//!
//! Inline formatting is separate from block parsing and operates over the
//! textual payload of one block (heading, paragraph, quote, list item, table
//! cell). Code blocks are never inline formatted.
//!
//! Each pass scans only the plain leftovers of the previous pass:
//! bold, then italic, then inline code. A run claimed by an earlier pass is
//! never reconsidered by a later one.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (spans) and `InlineSpan` (owned text)
//! - **`kinds`**: Delimiter owners (`Strong`, `Emphasis`, `CodeSpan`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `format_inline()` / `tokenize_inline()` entry points

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{format_inline, tokenize_inline};
pub use types::{InlineNode, InlineSpan, InlineStyle, plain_text};
