use crate::ui::components::inline_spans::InlineSpans;
use cognalyze_markdown_engine::{InlineSpan, Variant, render::Slot};
use dioxus::prelude::*;

/// Component to render a flat list group as an HTML ul/ol
#[component]
pub fn ListComponent(ordered: bool, items: Vec<Vec<InlineSpan>>, variant: Variant) -> Element {
    let list_class = variant.classes(Slot::List { ordered });
    let item_class = variant.classes(Slot::ListItem);

    if ordered {
        rsx! {
            ol {
                class: "{list_class}",
                for item in items {
                    li { class: "{item_class}", InlineSpans { spans: item, variant } }
                }
            }
        }
    } else {
        rsx! {
            ul {
                class: "{list_class}",
                for item in items {
                    li { class: "{item_class}", InlineSpans { spans: item, variant } }
                }
            }
        }
    }
}
