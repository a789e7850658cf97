pub mod blocks;
pub mod format;
pub mod inline;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use text::lines_with_index;

pub use format::{FormatVersion, ParseFormatVersionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates the block kinds without their line spans.
    pub fn kinds(&self) -> impl Iterator<Item = &BlockKind> {
        self.blocks.iter().map(|b| &b.kind)
    }
}

/// Parses `text` into blocks. Total: any input yields a document, and empty
/// input yields no blocks.
pub fn parse_document(text: &str, version: FormatVersion) -> ParsedDoc {
    if text.is_empty() {
        return ParsedDoc { blocks: vec![] };
    }

    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(version);

    for lr in lines_with_index(text) {
        builder.push(classifier.classify(&lr));
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Convenience: block kinds for `text` under the default format version.
pub fn parse_blocks(text: &str) -> Vec<BlockKind> {
    parse_document(text, FormatVersion::default())
        .blocks
        .into_iter()
        .map(|b| b.kind)
        .collect()
}
