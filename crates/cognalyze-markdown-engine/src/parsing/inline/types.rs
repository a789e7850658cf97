use serde::Serialize;

use crate::parsing::text::Span;

/// The formatting attribute carried by an inline fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InlineStyle {
    Plain,
    Bold,
    Italic,
    Code,
}

/// An inline fragment located by byte spans in the formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineNode {
    pub style: InlineStyle,
    /// Full span including delimiters.
    pub full: Span,
    /// Content between the delimiters. Equal to `full` for plain text.
    pub inner: Span,
}

impl InlineNode {
    /// A plain text node; its full and inner spans coincide.
    pub fn plain(span: Span) -> Self {
        Self {
            style: InlineStyle::Plain,
            full: span,
            inner: span,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.style == InlineStyle::Plain
    }
}

/// A typed, owned fragment of a block's text.
///
/// Concatenating [`InlineSpan::text`] over a block's spans reconstructs its
/// content with the formatting markers removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl InlineSpan {
    /// Materializes a node against the text it was parsed from.
    pub fn from_node(text: &str, node: &InlineNode) -> Self {
        let inner = node.inner.slice(text).to_string();
        match node.style {
            InlineStyle::Plain => InlineSpan::Plain(inner),
            InlineStyle::Bold => InlineSpan::Bold(inner),
            InlineStyle::Italic => InlineSpan::Italic(inner),
            InlineStyle::Code => InlineSpan::Code(inner),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(t)
            | InlineSpan::Bold(t)
            | InlineSpan::Italic(t)
            | InlineSpan::Code(t) => t,
        }
    }

    pub fn style(&self) -> InlineStyle {
        match self {
            InlineSpan::Plain(_) => InlineStyle::Plain,
            InlineSpan::Bold(_) => InlineStyle::Bold,
            InlineSpan::Italic(_) => InlineStyle::Italic,
            InlineSpan::Code(_) => InlineStyle::Code,
        }
    }
}

/// Concatenates the de-marked text of `spans`.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}
