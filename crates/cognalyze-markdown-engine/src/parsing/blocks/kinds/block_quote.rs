/// Blockquote block type with owned delimiter constant.
///
/// Only a single `> ` level is recognised; `>> x` and a bare `>` fall
/// through to paragraphs.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its separating space.
    pub const PREFIX: &'static str = "> ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
