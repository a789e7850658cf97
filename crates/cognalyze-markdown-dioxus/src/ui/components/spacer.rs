use cognalyze_markdown_engine::{Variant, render::Slot};
use dioxus::prelude::*;

#[component]
pub fn Spacer(variant: Variant) -> Element {
    rsx! {
        div { class: variant.classes(Slot::Spacer) }
    }
}
