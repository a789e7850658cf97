use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
    types::{InlineNode, InlineSpan, InlineStyle},
};

/// Outcome of probing one position of a plain run.
enum Scan {
    /// A delimited run was claimed; the cursor sits after it.
    Node(InlineNode),
    /// Bytes were consumed but stay part of the plain run.
    Literal,
    /// Nothing starts here.
    Miss,
}

/// Formats `text` into owned inline spans.
///
/// See [`tokenize_inline`] for the precedence rules.
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    tokenize_inline(text)
        .iter()
        .map(|node| InlineSpan::from_node(text, node))
        .collect()
}

/// Splits `text` into inline nodes covering it with no gaps or overlaps.
///
/// # Precedence
/// Three passes, each re-scanning only the plain leftovers of the previous:
/// 1. `**bold**` / `__bold__`
/// 2. `*italic*` / `_italic_` (a doubled delimiter stays literal)
/// 3. `` `code` ``
///
/// Every match is leftmost and non-greedy, and never crosses a line break.
/// A run claimed by an earlier pass is never reconsidered, so
/// `**a*b*c**` is a single bold node containing `a*b*c`. Unpaired
/// delimiters remain plain text.
pub fn tokenize_inline(text: &str) -> Vec<InlineNode> {
    let whole = vec![InlineNode::plain(Span {
        start: 0,
        end: text.len(),
    })];
    let bold = refine_plain(text, whole, try_parse_strong);
    let italic = refine_plain(text, bold, try_parse_emphasis);
    refine_plain(text, italic, try_parse_code_span)
}

/// Runs one pass over the plain nodes of `nodes`, leaving others untouched.
fn refine_plain(
    text: &str,
    nodes: Vec<InlineNode>,
    try_parse: fn(&mut Cursor<'_>) -> Scan,
) -> Vec<InlineNode> {
    // Helper to flush accumulated text as a plain node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::plain(Span { start, end }));
        }
    }

    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let mut cur = Cursor::new(node.full.slice(text), node.full.start);
        let mut text_start = cur.pos();
        while !cur.eof() {
            match try_parse(&mut cur) {
                Scan::Node(found) => {
                    flush_text(&mut out, text_start, found.full.start);
                    text_start = found.full.end;
                    out.push(found);
                }
                Scan::Literal => {}
                Scan::Miss => {
                    cur.bump();
                }
            }
        }
        flush_text(&mut out, text_start, cur.pos());
    }
    out
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Scan {
    Strong::DELIMITERS
        .iter()
        .find_map(|delim| try_parse_delimited(cur, delim, InlineStyle::Bold))
        .map_or(Scan::Miss, Scan::Node)
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Scan {
    for delim in Emphasis::DELIMITERS {
        if cur.starts_with(&Emphasis::doubled(delim)) {
            cur.bump_n(2);
            return Scan::Literal;
        }
        if let Some(node) = try_parse_delimited(cur, &[delim], InlineStyle::Italic) {
            return Scan::Node(node);
        }
    }
    Scan::Miss
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Scan {
    try_parse_delimited(cur, &[CodeSpan::TICK], InlineStyle::Code).map_or(Scan::Miss, Scan::Node)
}

/// Attempts to parse `delim ... delim` starting at the current position.
///
/// The closing run is the first occurrence of `delim` after the opener.
/// Returns `None` if not at `delim` or if the run isn't closed before the
/// end of input or a line break. On failure, cursor position is restored.
fn try_parse_delimited(cur: &mut Cursor<'_>, delim: &[u8], style: InlineStyle) -> Option<InlineNode> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.at_line_break() && !cur.starts_with(delim) {
        cur.bump();
    }

    if !cur.starts_with(delim) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(delim.len());
    let end = cur.pos();

    Some(InlineNode {
        style,
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
