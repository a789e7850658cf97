use cognalyze_markdown_config::Config;
use cognalyze_markdown_engine::Variant;
use dioxus::prelude::*;

use super::components::{MarkdownEditor, MarkdownRenderer};

const APP_CSS: &str = include_str!("../assets/app.css");

/// Editor on the left, standalone rendering on the right.
#[component]
pub fn App(config: Config, initial_content: String) -> Element {
    let mut content = use_signal(|| initial_content);
    let mut variant = use_signal(|| config.variant);
    let editor = config.editor.clone();
    let format_version = config.format_version;

    rsx! {
        style { {APP_CSS} }
        div {
            class: "app-container",
            div {
                class: "pane",
                h2 { "Markdown" }
                MarkdownEditor {
                    value: content(),
                    on_change: move |next: String| content.set(next),
                    placeholder: editor.placeholder,
                    show_preview: editor.show_preview,
                    empty_preview_message: editor.empty_preview_message,
                    format_version,
                }
            }
            div {
                class: "pane",
                div {
                    class: "variant-bar",
                    for v in Variant::ALL {
                        button {
                            r#type: "button",
                            class: variant_button_class(v == variant()),
                            onclick: move |_| {
                                log::debug!("variant switched to {v}");
                                variant.set(v);
                            },
                            {v.as_str()}
                        }
                    }
                }
                MarkdownRenderer {
                    content: content(),
                    variant: variant(),
                    format_version,
                }
            }
        }
    }
}

fn variant_button_class(active: bool) -> &'static str {
    if active {
        "variant active"
    } else {
        "variant"
    }
}
