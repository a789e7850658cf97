/// Inline code type with owned delimiter constant.
///
/// Code spans are matched last, so backticks inside bold or italic runs
/// are kept as literal characters of those runs.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
