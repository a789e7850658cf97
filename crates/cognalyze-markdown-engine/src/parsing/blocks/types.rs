use serde::Serialize;

use crate::parsing::{inline::InlineSpan, text::Span};

use super::kinds::Alignment;

/// The kind of a block and its formatted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// `#`, `##` or `###` heading.
    Heading { level: u8, text: Vec<InlineSpan> },
    /// Contiguous same-kind list items.
    List {
        ordered: bool,
        items: Vec<Vec<InlineSpan>>,
    },
    /// A single `> ` line.
    BlockQuote { text: Vec<InlineSpan> },
    /// Raw code, never inline formatted.
    CodeBlock { lang: Option<String>, text: String },
    /// Horizontal rule.
    Rule,
    /// Pipe table. Rows may have more or fewer cells than `headers`.
    Table {
        headers: Vec<Vec<InlineSpan>>,
        alignments: Vec<Alignment>,
        rows: Vec<Vec<Vec<InlineSpan>>>,
    },
    /// Any other non-blank line.
    Paragraph { text: Vec<InlineSpan> },
    /// A blank line, kept for vertical rhythm.
    Spacer,
}

impl BlockKind {
    /// Short label used in logs and outlines.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "Heading",
            BlockKind::List { .. } => "List",
            BlockKind::BlockQuote { .. } => "BlockQuote",
            BlockKind::CodeBlock { .. } => "CodeBlock",
            BlockKind::Rule => "Rule",
            BlockKind::Table { .. } => "Table",
            BlockKind::Paragraph { .. } => "Paragraph",
            BlockKind::Spacer => "Spacer",
        }
    }
}

/// A parsed block with the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    /// The block kind and payload.
    pub kind: BlockKind,
    /// Source line indices `[start, end)` consumed by this block.
    pub lines: Span,
}
