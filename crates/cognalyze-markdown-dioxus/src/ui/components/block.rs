use crate::ui::components::{
    block_quote::BlockQuote, code_fence::CodeFence, heading::Heading,
    list_component::ListComponent, paragraph::Paragraph, spacer::Spacer, table::Table,
    thematic_break::ThematicBreak,
};
use cognalyze_markdown_engine::{BlockKind, BlockNode, Variant};
use dioxus::prelude::*;

#[component]
pub fn Block(block: BlockNode, variant: Variant) -> Element {
    match block.kind {
        BlockKind::Heading { level, text } => rsx! {
            Heading { level, text, variant }
        },
        BlockKind::List { ordered, items } => rsx! {
            ListComponent { ordered, items, variant }
        },
        BlockKind::BlockQuote { text } => rsx! {
            BlockQuote { text, variant }
        },
        BlockKind::CodeBlock { lang, text } => rsx! {
            CodeFence { text, lang, variant }
        },
        BlockKind::Rule => rsx! {
            ThematicBreak { variant }
        },
        BlockKind::Table {
            headers,
            alignments,
            rows,
        } => rsx! {
            Table { headers, alignments, rows, variant }
        },
        BlockKind::Paragraph { text } => rsx! {
            Paragraph { text, variant }
        },
        BlockKind::Spacer => rsx! {
            Spacer { variant }
        },
    }
}
