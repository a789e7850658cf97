use crate::ui::components::inline_spans::InlineSpans;
use cognalyze_markdown_engine::{InlineSpan, Variant, render::Slot};
use dioxus::prelude::*;

/// A single `> ` line. Quotes never group across lines.
#[component]
pub fn BlockQuote(text: Vec<InlineSpan>, variant: Variant) -> Element {
    rsx! {
        blockquote {
            class: variant.classes(Slot::BlockQuote),
            InlineSpans { spans: text, variant }
        }
    }
}
