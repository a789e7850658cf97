use crate::ui::components::inline_spans::InlineSpans;
use cognalyze_markdown_engine::{Alignment, InlineSpan, Variant, render::Slot};
use dioxus::prelude::*;

/// Pipe table. Cells past the last alignment are left aligned.
#[component]
pub fn Table(
    headers: Vec<Vec<InlineSpan>>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<Vec<InlineSpan>>>,
    variant: Variant,
) -> Element {
    let align_style = |i: usize| {
        let align = alignments.get(i).copied().unwrap_or_default();
        format!("text-align: {}", align.as_str())
    };
    let header_class = variant.classes(Slot::TableHeaderCell);
    let cell_class = variant.classes(Slot::TableCell);

    rsx! {
        table {
            class: variant.classes(Slot::Table),
            thead {
                tr {
                    for (i, cell) in headers.into_iter().enumerate() {
                        th {
                            class: "{header_class}",
                            style: align_style(i),
                            InlineSpans { spans: cell, variant }
                        }
                    }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        for (i, cell) in row.into_iter().enumerate() {
                            td {
                                class: "{cell_class}",
                                style: align_style(i),
                                InlineSpans { spans: cell, variant }
                            }
                        }
                    }
                }
            }
        }
    }
}
