//! Converts parsed blocks into styled terminal lines.

use cognalyze_markdown_engine::{Alignment, BlockKind, InlineSpan, ParsedDoc, Variant};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

/// Renders every block of `doc` as terminal lines.
///
/// `Compact` drops the blank line after headings; `Rich` underlines
/// top-level headings.
pub fn render_lines(doc: &ParsedDoc, variant: Variant) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for kind in doc.kinds() {
        render_block(kind, variant, &mut lines);
    }
    lines
}

fn render_block(kind: &BlockKind, variant: Variant, lines: &mut Vec<Line<'static>>) {
    match kind {
        BlockKind::Heading { level, text } => {
            let style = heading_style(*level);
            let spans = inline_spans(text, style);
            let width: usize = spans.iter().map(Span::width).sum();
            lines.push(Line::from(spans));
            if variant == Variant::Rich && *level == 1 {
                lines.push(Line::from(Span::styled("═".repeat(width), style)));
            }
            if variant != Variant::Compact {
                lines.push(Line::default());
            }
        }
        BlockKind::List { ordered, items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("  {}. ", i + 1)
                } else {
                    "  • ".to_string()
                };
                let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Cyan))];
                spans.extend(inline_spans(item, Style::default()));
                lines.push(Line::from(spans));
            }
        }
        BlockKind::BlockQuote { text } => {
            let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::Blue))];
            spans.extend(inline_spans(
                text,
                Style::default().add_modifier(Modifier::ITALIC),
            ));
            lines.push(Line::from(spans));
        }
        BlockKind::CodeBlock { lang, text } => {
            if let Some(lang) = lang {
                lines.push(Line::from(Span::styled(
                    format!("  [{lang}]"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for code_line in text.split('\n') {
                lines.push(Line::from(Span::styled(
                    format!("  {code_line}"),
                    code_style(),
                )));
            }
        }
        BlockKind::Rule => {
            lines.push(Line::from(Span::styled(
                "─".repeat(RULE_WIDTH),
                Style::default().fg(Color::DarkGray),
            )));
        }
        BlockKind::Table {
            headers,
            alignments,
            rows,
        } => render_table(headers, alignments, rows, lines),
        BlockKind::Paragraph { text } => {
            lines.push(Line::from(inline_spans(text, Style::default())));
        }
        BlockKind::Spacer => lines.push(Line::default()),
    }
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::Blue,
        _ => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Styles inline spans on top of `base`.
pub fn inline_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| {
            let style = match span {
                InlineSpan::Plain(_) => base,
                InlineSpan::Bold(_) => base.add_modifier(Modifier::BOLD),
                InlineSpan::Italic(_) => base.add_modifier(Modifier::ITALIC),
                InlineSpan::Code(_) => base.patch(code_style()),
            };
            Span::styled(span.text().to_string(), style)
        })
        .collect()
}

fn render_table(
    headers: &[Vec<InlineSpan>],
    alignments: &[Alignment],
    rows: &[Vec<Vec<InlineSpan>>],
    lines: &mut Vec<Line<'static>>,
) {
    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let header_cells: Vec<_> = headers
        .iter()
        .map(|cell| inline_spans(cell, header_style))
        .collect();
    let body: Vec<Vec<_>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| inline_spans(cell, Style::default()))
                .collect()
        })
        .collect();

    // Column widths span every row, including ragged ones
    let mut widths: Vec<usize> = Vec::new();
    for row in std::iter::once(&header_cells).chain(body.iter()) {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.iter().map(Span::width).sum();
            match widths.get_mut(i) {
                Some(existing) => *existing = (*existing).max(w),
                None => widths.push(w),
            }
        }
    }

    lines.push(table_row(header_cells, &widths, alignments));
    let divider = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        divider,
        Style::default().fg(Color::DarkGray),
    )));
    for row in body {
        lines.push(table_row(row, &widths, alignments));
    }
}

fn table_row(
    cells: Vec<Vec<Span<'static>>>,
    widths: &[usize],
    alignments: &[Alignment],
) -> Line<'static> {
    let mut out = Vec::new();
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let used: usize = cell.iter().map(Span::width).sum();
        let gap = widths.get(i).copied().unwrap_or(used).saturating_sub(used);
        let (left, right) = match alignments.get(i).copied().unwrap_or_default() {
            Alignment::Left => (0, gap),
            Alignment::Right => (gap, 0),
            Alignment::Center => (gap / 2, gap - gap / 2),
        };
        if left > 0 {
            out.push(Span::raw(" ".repeat(left)));
        }
        out.extend(cell);
        if right > 0 {
            out.push(Span::raw(" ".repeat(right)));
        }
    }
    Line::from(out)
}
