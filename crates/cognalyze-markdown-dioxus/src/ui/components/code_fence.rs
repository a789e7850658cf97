use cognalyze_markdown_engine::{Variant, render::Slot};
use dioxus::prelude::*;

#[component]
pub fn CodeFence(text: String, lang: Option<String>, variant: Variant) -> Element {
    let lang_class = lang
        .as_ref()
        .map(|l| format!("language-{l}"))
        .unwrap_or_else(|| "language-text".to_string());
    let code_class = format!("{lang_class} {}", variant.classes(Slot::CodeBlockText));

    rsx! {
        div {
            class: variant.classes(Slot::CodeBlock),
            code {
                class: "{code_class}",
                "{text}"
            }
        }
    }
}
