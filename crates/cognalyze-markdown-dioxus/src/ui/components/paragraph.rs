use crate::ui::components::inline_spans::InlineSpans;
use cognalyze_markdown_engine::{InlineSpan, Variant, render::Slot};
use dioxus::prelude::*;

#[component]
pub fn Paragraph(text: Vec<InlineSpan>, variant: Variant) -> Element {
    rsx! {
        p {
            class: variant.classes(Slot::Paragraph),
            InlineSpans { spans: text, variant }
        }
    }
}
