use cognalyze_markdown_engine::{Variant, render::Slot};
use dioxus::prelude::*;

/// Component for rendering thematic breaks (horizontal rules)
#[component]
pub fn ThematicBreak(variant: Variant) -> Element {
    rsx! {
        hr { class: variant.classes(Slot::Rule) }
    }
}
