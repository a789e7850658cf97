use crate::parsing::{FormatVersion, inline::format_inline, text::Span};

use super::{
    classify::{LineClass, LineLeaf},
    kinds::{Alignment, CodeFence, ListMarker, Table},
    types::{BlockKind, BlockNode},
};

/// Items collected for the list currently being built.
#[derive(Debug)]
struct ListBuffer<'a> {
    marker: ListMarker,
    start: usize,
    last: usize,
    items: Vec<&'a str>,
}

/// A table whose separator row has been seen.
#[derive(Debug)]
struct OpenTable<'a> {
    start: usize,
    last: usize,
    header: &'a str,
    alignments: Vec<Alignment>,
    rows: Vec<&'a str>,
}

/// A multi-line fence waiting for its closing line.
#[derive(Debug)]
struct OpenFence<'a> {
    start: usize,
    last: usize,
    lang: Option<&'a str>,
    body: Vec<&'a str>,
}

#[derive(Debug)]
enum LeafState<'a> {
    None,
    /// A line containing `|`; whether it heads a table depends on the next line.
    TableCandidate(LineClass<'a>),
    Table(OpenTable<'a>),
    Fence(OpenFence<'a>),
}

/// Phase 2 of block parsing: turns classified lines into [`BlockNode`]s.
///
/// Lines are pushed in source order. At most one line is held back (a table
/// candidate), and list items are buffered until a line of another kind
/// arrives. Every emitted block has its inline payload already formatted.
#[derive(Debug)]
pub struct BlockBuilder<'a> {
    version: FormatVersion,
    list: Option<ListBuffer<'a>>,
    leaf: LeafState<'a>,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            list: None,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'a>) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => self.start(c),
            LeafState::TableCandidate(header) => self.resolve_candidate(header, c),
            LeafState::Table(table) => self.consume_table_line(table, c),
            LeafState::Fence(fence) => self.consume_fence_line(fence, c),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush: a pending candidate never saw its separator
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::TableCandidate(header) => self.dispatch(header),
            other => self.leaf = other,
        }
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::Table(table) => self.emit_table(table),
            LeafState::Fence(fence) => {
                log::debug!("unterminated fence opened on line {}", fence.start);
                self.emit_fence(fence);
            }
            LeafState::None | LeafState::TableCandidate(_) => {}
        }
        self.flush_list();
        self.out
    }

    /// Handles a line with no open leaf. Pipe lines get first refusal as
    /// table headers.
    fn start(&mut self, c: LineClass<'a>) {
        if c.has_pipe {
            self.leaf = LeafState::TableCandidate(c);
        } else {
            self.dispatch(c);
        }
    }

    fn resolve_candidate(&mut self, header: LineClass<'a>, c: LineClass<'a>) {
        match c.separator() {
            Some(alignments) => {
                log::debug!(
                    "table detected at line {} with {} columns",
                    header.line,
                    alignments.len()
                );
                self.flush_list();
                self.leaf = LeafState::Table(OpenTable {
                    start: header.line,
                    last: c.line,
                    header: header.trimmed,
                    alignments,
                    rows: vec![],
                });
            }
            None => {
                self.dispatch(header);
                self.push(c);
            }
        }
    }

    fn consume_table_line(&mut self, mut table: OpenTable<'a>, c: LineClass<'a>) {
        if c.has_pipe {
            table.rows.push(c.trimmed);
            table.last = c.line;
            self.leaf = LeafState::Table(table);
        } else {
            self.emit_table(table);
            self.start(c);
        }
    }

    fn consume_fence_line(&mut self, mut fence: OpenFence<'a>, c: LineClass<'a>) {
        fence.last = c.line;
        if CodeFence::closes(c.trimmed) {
            self.emit_fence(fence);
        } else {
            fence.body.push(c.raw);
            self.leaf = LeafState::Fence(fence);
        }
    }

    /// Emits the block a line stands for on its own.
    fn dispatch(&mut self, c: LineClass<'a>) {
        let line = Span::line(c.line);
        match c.leaf {
            LineLeaf::ListItem { marker, text } => self.push_list_item(marker, c.line, text),
            LineLeaf::Heading { level, text } => self.emit_leaf(
                line,
                BlockKind::Heading {
                    level,
                    text: format_inline(text),
                },
            ),
            LineLeaf::Quote(text) => self.emit_leaf(
                line,
                BlockKind::BlockQuote {
                    text: format_inline(text),
                },
            ),
            LineLeaf::Fence(fence) if self.version.multiline_fences() && !fence.closed => {
                self.flush_list();
                // Text after the language tag is the first code line
                let first = fence.body.trim();
                self.leaf = LeafState::Fence(OpenFence {
                    start: c.line,
                    last: c.line,
                    lang: fence.lang,
                    body: if first.is_empty() { vec![] } else { vec![first] },
                });
            }
            LineLeaf::Fence(fence) => self.emit_leaf(
                line,
                BlockKind::CodeBlock {
                    lang: fence.lang.map(str::to_string),
                    text: fence.body.trim().to_string(),
                },
            ),
            LineLeaf::Rule => self.emit_leaf(line, BlockKind::Rule),
            LineLeaf::Blank => self.emit_leaf(line, BlockKind::Spacer),
            LineLeaf::Text(text) => self.emit_leaf(
                line,
                BlockKind::Paragraph {
                    text: format_inline(text),
                },
            ),
        }
    }

    fn push_list_item(&mut self, marker: ListMarker, line: usize, text: &'a str) {
        if let Some(list) = self.list.as_mut()
            && list.marker == marker
        {
            list.items.push(text);
            list.last = line;
            return;
        }
        self.flush_list();
        self.list = Some(ListBuffer {
            marker,
            start: line,
            last: line,
            items: vec![text],
        });
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            let kind = BlockKind::List {
                ordered: list.marker.is_ordered(),
                items: list.items.into_iter().map(format_inline).collect(),
            };
            self.emit(
                Span {
                    start: list.start,
                    end: list.last + 1,
                },
                kind,
            );
        }
    }

    fn emit_table(&mut self, table: OpenTable<'a>) {
        let cells = |line: &str| -> Vec<_> {
            Table::split_cells(line)
                .into_iter()
                .map(format_inline)
                .collect()
        };
        let kind = BlockKind::Table {
            headers: cells(table.header),
            alignments: table.alignments,
            rows: table.rows.into_iter().map(cells).collect(),
        };
        self.emit(
            Span {
                start: table.start,
                end: table.last + 1,
            },
            kind,
        );
    }

    fn emit_fence(&mut self, fence: OpenFence<'a>) {
        let kind = BlockKind::CodeBlock {
            lang: fence.lang.map(str::to_string),
            text: fence.body.join("\n"),
        };
        self.emit(
            Span {
                start: fence.start,
                end: fence.last + 1,
            },
            kind,
        );
    }

    /// Emits a non-list block, closing any list first.
    fn emit_leaf(&mut self, lines: Span, kind: BlockKind) {
        self.flush_list();
        self.emit(lines, kind);
    }

    fn emit(&mut self, lines: Span, kind: BlockKind) {
        log::trace!(
            "emit {} for lines {}..{}",
            kind.name(),
            lines.start,
            lines.end
        );
        self.out.push(BlockNode { kind, lines });
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new(FormatVersion::default())
    }
}
