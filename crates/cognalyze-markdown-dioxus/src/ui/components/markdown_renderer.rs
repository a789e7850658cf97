use crate::ui::components::block::Block;
use cognalyze_markdown_engine::{
    FormatVersion, ParsedDoc, Variant, parse_document, render::Slot,
};
use dioxus::prelude::*;

/// Parses `content` and renders every block inside a prose container.
#[component]
pub fn MarkdownRenderer(
    content: String,
    #[props(default)] variant: Variant,
    #[props(default)] format_version: FormatVersion,
    class: Option<String>,
) -> Element {
    let doc = parse_document(&content, format_version);
    log::trace!("rendering {} blocks as {variant}", doc.blocks.len());

    rsx! {
        MarkdownDocument { doc, variant, class }
    }
}

/// Renders an already parsed document. Blocks are keyed by their first
/// source line.
#[component]
pub fn MarkdownDocument(doc: ParsedDoc, variant: Variant, class: Option<String>) -> Element {
    let root_class = match class {
        Some(extra) => format!("{} {extra}", variant.classes(Slot::Root)),
        None => variant.classes(Slot::Root),
    };

    rsx! {
        div {
            class: "{root_class}",
            for block in doc.blocks {
                Block {
                    key: "{block.lines.start}",
                    block: block.clone(),
                    variant
                }
            }
        }
    }
}
