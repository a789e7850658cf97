use crate::ui::components::inline_spans::InlineSpans;
use cognalyze_markdown_engine::{InlineSpan, Variant, render::Slot};
use dioxus::prelude::*;

#[component]
pub fn Heading(level: u8, text: Vec<InlineSpan>, variant: Variant) -> Element {
    let class_name = variant.classes(Slot::Heading(level));
    let content_element = rsx! {
        InlineSpans { spans: text, variant }
    };

    match level {
        1 => rsx! { h1 { class: "{class_name}", {content_element} } },
        2 => rsx! { h2 { class: "{class_name}", {content_element} } },
        _ => rsx! { h3 { class: "{class_name}", {content_element} } },
    }
}
