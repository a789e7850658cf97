pub mod editing;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use editing::{EditorShell, EditorTab, ShellView};
pub use parsing::{
    FormatVersion, ParseFormatVersionError, ParsedDoc,
    blocks::{Alignment, BlockKind, BlockNode},
    inline::{InlineSpan, InlineStyle, format_inline},
    parse_blocks, parse_document,
};
pub use render::{ParseVariantError, Variant, render_html};
