/// A reference to a single source line with its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line index.
    pub index: usize,
    /// The line text without its `\n` terminator or a trailing `\r`.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`.
///
/// Splits on `\n` only, so a trailing newline yields a final empty line and
/// `"a\n\nb"` yields three lines. Empty input yields a single empty line;
/// callers that want "no blocks for no input" must check for that first.
pub fn lines_with_index(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n').enumerate().map(|(index, line)| LineRef {
        index,
        text: line.strip_suffix('\r').unwrap_or(line),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<&str> {
        lines_with_index(s).map(|l| l.text).collect()
    }

    #[test]
    fn splits_on_newline() {
        assert_eq!(texts("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(texts("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_newline_yields_empty_line() {
        assert_eq!(texts("a\n"), vec!["a", ""]);
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(texts("a\r\nb\r\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn indexes_are_sequential() {
        let idx: Vec<usize> = lines_with_index("x\ny\nz").map(|l| l.index).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }
}
