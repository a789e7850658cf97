use crate::parsing::{
    ParsedDoc,
    inline::{InlineStyle, tokenize_inline},
};

/// Validates block-level parser output invariants.
///
/// Asserts that:
/// - Every block covers at least one line
/// - Block line spans tile `0..line_count` in order, with no gaps or overlaps
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, doc: &ParsedDoc) {
    if text.is_empty() {
        assert!(doc.blocks.is_empty(), "empty input produced blocks");
        return;
    }

    let line_count = text.split('\n').count();
    let mut next = 0usize;
    for b in &doc.blocks {
        assert!(!b.lines.is_empty(), "block with no lines: {:?}", b);
        assert_eq!(
            b.lines.start, next,
            "block lines not contiguous: expected start {next}, got {:?}",
            b.lines
        );
        next = b.lines.end;
    }
    assert_eq!(
        next, line_count,
        "blocks cover {next} lines but input has {line_count}"
    );
}

/// Validates that inline nodes tile `text`.
///
/// Asserts that:
/// - Full spans are contiguous and cover `0..text.len()`
/// - Inner spans sit inside their full spans; plain nodes have no delimiters
/// - The bytes outside an inner span are delimiter bytes only
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_inline(text: &str) {
    let nodes = tokenize_inline(text);
    let mut next = 0usize;
    for n in &nodes {
        assert_eq!(
            n.full.start, next,
            "inline nodes not contiguous in {text:?}: {:?}",
            n
        );
        assert!(
            n.inner.start >= n.full.start && n.inner.end <= n.full.end,
            "inner span outside full span in {text:?}: {:?}",
            n
        );
        if n.style == InlineStyle::Plain {
            assert_eq!(n.inner, n.full, "plain node with delimiters: {:?}", n);
            assert!(!n.full.is_empty(), "empty plain node in {text:?}");
        } else {
            let open = &text.as_bytes()[n.full.start..n.inner.start];
            let close = &text.as_bytes()[n.inner.end..n.full.end];
            assert_eq!(open, close, "mismatched delimiters in {text:?}: {:?}", n);
            assert!(
                open.iter().all(|b| matches!(b, b'*' | b'_' | b'`')),
                "non-delimiter bytes consumed in {text:?}: {:?}",
                n
            );
        }
        next = n.full.end;
    }
    assert_eq!(next, text.len(), "inline nodes do not cover {text:?}");
}
