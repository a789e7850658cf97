use cognalyze_markdown_engine::{InlineSpan, Variant, render::Slot};
use dioxus::prelude::*;

/// Renders formatted inline spans as text, `strong`, `em` and `code` nodes.
#[component]
pub fn InlineSpans(spans: Vec<InlineSpan>, variant: Variant) -> Element {
    rsx! {
        for span in spans {
            {render_span(span, variant)}
        }
    }
}

fn render_span(span: InlineSpan, variant: Variant) -> Element {
    match span {
        InlineSpan::Plain(text) => rsx! { "{text}" },
        InlineSpan::Bold(text) => rsx! {
            strong { class: variant.classes(Slot::Bold), "{text}" }
        },
        InlineSpan::Italic(text) => rsx! {
            em { class: variant.classes(Slot::Italic), "{text}" }
        },
        InlineSpan::Code(text) => rsx! {
            code { class: variant.classes(Slot::InlineCode), "{text}" }
        },
    }
}
