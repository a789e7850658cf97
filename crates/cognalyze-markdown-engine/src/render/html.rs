use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    FormatVersion, ParsedDoc,
    blocks::{Alignment, BlockKind},
    inline::InlineSpan,
    parse_document,
};

use super::variant::{Slot, Variant};

/// Parses `content` and renders it as an HTML fragment.
///
/// The fragment is a single root `<div>` carrying the variant's prose
/// classes, with one element per block. All text is escaped; the parser
/// never passes HTML through.
pub fn render_html(content: &str, variant: Variant, version: FormatVersion) -> String {
    render_doc_html(&parse_document(content, version), variant)
}

/// Renders an already parsed document.
pub fn render_doc_html(doc: &ParsedDoc, variant: Variant) -> String {
    let mut w = HtmlWriter::new(variant);
    w.open("div", Slot::Root);
    w.newline();
    for block in doc.kinds() {
        w.block(block);
        w.newline();
    }
    w.close("div");
    w.newline();
    w.finish()
}

/// Renders inline spans without any block wrapper.
pub fn render_inline_html(spans: &[InlineSpan], variant: Variant) -> String {
    let mut w = HtmlWriter::new(variant);
    w.spans(spans);
    w.finish()
}

struct HtmlWriter {
    buffer: String,
    variant: Variant,
}

impl HtmlWriter {
    fn new(variant: Variant) -> Self {
        Self {
            buffer: String::new(),
            variant,
        }
    }

    fn finish(self) -> String {
        self.buffer
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
    }

    fn open(&mut self, tag: &str, slot: Slot) {
        self.open_with(tag, slot, &[]);
    }

    /// Writes `<tag class="..." k="v"...>`.
    fn open_with(&mut self, tag: &str, slot: Slot, attributes: &[(&str, &str)]) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        let class = self.variant.classes(slot);
        self.attribute("class", &class);
        for (key, value) in attributes {
            self.attribute(key, value);
        }
        self.buffer.push('>');
    }

    fn attribute(&mut self, key: &str, value: &str) {
        self.buffer.push(' ');
        self.buffer.push_str(key);
        self.buffer.push_str("=\"");
        self.buffer.push_str(&encode_double_quoted_attribute(value));
        self.buffer.push('"');
    }

    fn close(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    fn text(&mut self, text: &str) {
        self.buffer.push_str(&encode_text(text));
    }

    fn spans(&mut self, spans: &[InlineSpan]) {
        for span in spans {
            let (tag, slot) = match span {
                InlineSpan::Plain(text) => {
                    self.text(text);
                    continue;
                }
                InlineSpan::Bold(_) => ("strong", Slot::Bold),
                InlineSpan::Italic(_) => ("em", Slot::Italic),
                InlineSpan::Code(_) => ("code", Slot::InlineCode),
            };
            self.open(tag, slot);
            self.text(span.text());
            self.close(tag);
        }
    }

    fn wrapped(&mut self, tag: &str, slot: Slot, spans: &[InlineSpan]) {
        self.open(tag, slot);
        self.spans(spans);
        self.close(tag);
    }

    fn block(&mut self, kind: &BlockKind) {
        match kind {
            BlockKind::Heading { level, text } => {
                let tag = match level {
                    1 => "h1",
                    2 => "h2",
                    _ => "h3",
                };
                self.wrapped(tag, Slot::Heading(*level), text);
            }
            BlockKind::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                self.open(tag, Slot::List { ordered: *ordered });
                for item in items {
                    self.wrapped("li", Slot::ListItem, item);
                }
                self.close(tag);
            }
            BlockKind::BlockQuote { text } => self.wrapped("blockquote", Slot::BlockQuote, text),
            BlockKind::CodeBlock { lang, text } => {
                match lang {
                    Some(lang) => self.open_with("div", Slot::CodeBlock, &[("data-lang", lang.as_str())]),
                    None => self.open("div", Slot::CodeBlock),
                }
                self.open("code", Slot::CodeBlockText);
                self.text(text);
                self.close("code");
                self.close("div");
            }
            BlockKind::Rule => self.open("hr", Slot::Rule),
            BlockKind::Table {
                headers,
                alignments,
                rows,
            } => self.table(headers, alignments, rows),
            BlockKind::Paragraph { text } => self.wrapped("p", Slot::Paragraph, text),
            BlockKind::Spacer => {
                self.open("div", Slot::Spacer);
                self.close("div");
            }
        }
    }

    fn table(
        &mut self,
        headers: &[Vec<InlineSpan>],
        alignments: &[Alignment],
        rows: &[Vec<Vec<InlineSpan>>],
    ) {
        self.open("table", Slot::Table);
        self.buffer.push_str("<thead><tr>");
        self.cells("th", Slot::TableHeaderCell, headers, alignments);
        self.buffer.push_str("</tr></thead><tbody>");
        for row in rows {
            self.buffer.push_str("<tr>");
            self.cells("td", Slot::TableCell, row, alignments);
            self.buffer.push_str("</tr>");
        }
        self.buffer.push_str("</tbody>");
        self.close("table");
    }

    fn cells(
        &mut self,
        tag: &str,
        slot: Slot,
        cells: &[Vec<InlineSpan>],
        alignments: &[Alignment],
    ) {
        for (i, cell) in cells.iter().enumerate() {
            let align = alignments.get(i).copied().unwrap_or_default();
            let style = format!("text-align: {}", align.as_str());
            self.open_with(tag, slot, &[("style", style.as_str())]);
            self.spans(cell);
            self.close(tag);
        }
    }
}
