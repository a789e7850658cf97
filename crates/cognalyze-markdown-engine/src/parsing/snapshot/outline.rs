use crate::parsing::{
    ParsedDoc,
    blocks::{Alignment, BlockKind},
    inline::InlineSpan,
};

/// Renders a parsed document as an indented text outline.
///
/// One header line per block (`Kind lines=start..end`), followed by its
/// payload indented by two spaces.
pub fn outline(doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        let header = match &block.kind {
            BlockKind::Heading { level, .. } => format!("Heading({level})"),
            BlockKind::List { ordered: true, .. } => "List(ordered)".to_string(),
            BlockKind::List { ordered: false, .. } => "List(unordered)".to_string(),
            BlockKind::CodeBlock {
                lang: Some(lang), ..
            } => format!("CodeBlock({lang})"),
            BlockKind::Table { alignments, .. } => format!("Table[{}]", alignment_list(alignments)),
            other => other.name().to_string(),
        };
        out.push_str(&format!(
            "{header} lines={}..{}\n",
            block.lines.start, block.lines.end
        ));

        match &block.kind {
            BlockKind::Heading { text, .. }
            | BlockKind::BlockQuote { text }
            | BlockKind::Paragraph { text } => {
                out.push_str(&format!("  {}\n", outline_spans(text)));
            }
            BlockKind::List { items, .. } => {
                for item in items {
                    out.push_str(&format!("  - {}\n", outline_spans(item)));
                }
            }
            BlockKind::CodeBlock { text, .. } => {
                out.push_str(&format!("  {text:?}\n"));
            }
            BlockKind::Table { headers, rows, .. } => {
                out.push_str(&format!("  header: {}\n", outline_cells(headers)));
                for row in rows {
                    out.push_str(&format!("  row: {}\n", outline_cells(row)));
                }
            }
            BlockKind::Rule | BlockKind::Spacer => {}
        }
    }
    out
}

/// Renders spans as `Style "text"` pairs separated by commas.
pub fn outline_spans(spans: &[InlineSpan]) -> String {
    if spans.is_empty() {
        return "(empty)".to_string();
    }
    spans
        .iter()
        .map(|span| format!("{:?} {:?}", span.style(), span.text()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn outline_cells(cells: &[Vec<InlineSpan>]) -> String {
    cells
        .iter()
        .map(|cell| outline_spans(cell))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn alignment_list(alignments: &[Alignment]) -> String {
    alignments
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
