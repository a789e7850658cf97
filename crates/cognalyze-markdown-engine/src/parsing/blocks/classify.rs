use crate::parsing::text::LineRef;

use super::kinds::{
    Alignment, BlockQuote, CodeFence, FenceLine, Heading, ListItem, ListMarker, Table,
    ThematicBreak,
};

/// What a trimmed line would be on its own, ignoring table detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLeaf<'a> {
    Heading { level: u8, text: &'a str },
    ListItem { marker: ListMarker, text: &'a str },
    Quote(&'a str),
    Fence(FenceLine<'a>),
    Rule,
    Blank,
    Text(&'a str),
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Table detection needs the
/// following line and is resolved by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based source line index.
    pub line: usize,
    /// The line as written, minus its terminator. Kept for fenced code bodies.
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub trimmed: &'a str,
    /// Whether the trimmed line contains a table pipe.
    pub has_pipe: bool,
    /// Structural meaning of the line, in fixed precedence order.
    pub leaf: LineLeaf<'a>,
}

impl LineClass<'_> {
    /// Column alignments if this line is a valid table separator row.
    pub fn separator(&self) -> Option<Vec<Alignment>> {
        if !self.has_pipe {
            return None;
        }
        Table::separator(self.trimmed)
    }
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: heading, unordered item, ordered item, blockquote, fence,
    /// rule, blank, text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.text.trim();
        LineClass {
            line: lr.index,
            raw: lr.text,
            trimmed,
            has_pipe: trimmed.contains(Table::PIPE),
            leaf: Self::leaf(trimmed),
        }
    }

    fn leaf(trimmed: &str) -> LineLeaf<'_> {
        if let Some((level, text)) = Heading::strip(trimmed) {
            return LineLeaf::Heading { level, text };
        }
        if let Some((marker, text)) = ListItem::strip(trimmed) {
            return LineLeaf::ListItem { marker, text };
        }
        if let Some(text) = BlockQuote::strip(trimmed) {
            return LineLeaf::Quote(text);
        }
        if let Some(fence) = CodeFence::open(trimmed) {
            return LineLeaf::Fence(fence);
        }
        if ThematicBreak::matches(trimmed) {
            return LineLeaf::Rule;
        }
        if trimmed.is_empty() {
            return LineLeaf::Blank;
        }
        LineLeaf::Text(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(&LineRef { index: 0, text })
    }

    #[test]
    fn trims_before_classifying() {
        let c = classify("   # Title  ");
        assert_eq!(c.raw, "   # Title  ");
        assert_eq!(c.trimmed, "# Title");
        assert_eq!(
            c.leaf,
            LineLeaf::Heading {
                level: 1,
                text: "Title"
            }
        );
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert_eq!(classify(" \t ").leaf, LineLeaf::Blank);
    }

    #[test]
    fn bullet_wins_over_rule_lookalike() {
        assert_eq!(
            classify("- - -").leaf,
            LineLeaf::ListItem {
                marker: ListMarker::Bullet,
                text: "- -"
            }
        );
        assert_eq!(classify("---").leaf, LineLeaf::Rule);
    }

    #[test]
    fn detects_pipes_and_separators() {
        let header = classify("|A|B|");
        assert!(header.has_pipe);
        assert_eq!(header.separator(), None);
        assert_eq!(header.leaf, LineLeaf::Text("|A|B|"));

        let sep = classify("| --- | ---: |");
        assert_eq!(
            sep.separator(),
            Some(vec![Alignment::Left, Alignment::Right])
        );
    }

    #[test]
    fn unrecognised_line_is_text() {
        assert_eq!(classify(">> nested").leaf, LineLeaf::Text(">> nested"));
        assert_eq!(classify("#### deep").leaf, LineLeaf::Text("#### deep"));
    }
}
