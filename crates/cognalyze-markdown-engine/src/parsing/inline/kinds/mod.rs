//! # Inline Kinds
//!
//! Inline-specific types that own their delimiters. The parser calls these
//! constants; it never hardcodes `**`, `*` or `` ` ``.
//!
//! - **`Strong`**: `**` and `__`, claimed in the first pass
//! - **`Emphasis`**: `*` and `_`, claimed in the second pass
//! - **`CodeSpan`**: `` ` ``, claimed in the last pass

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
