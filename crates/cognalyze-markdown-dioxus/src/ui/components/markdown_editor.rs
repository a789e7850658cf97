use crate::ui::components::markdown_renderer::MarkdownDocument;
use cognalyze_markdown_engine::{
    EditorShell, EditorTab, FormatVersion, InlineStyle, ShellView, Variant,
    editing::{DEFAULT_PLACEHOLDER, EMPTY_PREVIEW_MESSAGE, SYNTAX_HINTS, SyntaxHint},
    render::Slot,
};
use dioxus::prelude::*;

const TAB_CLASS: &str = "px-4 py-2 text-sm font-medium transition-colors";
const ACTIVE_TAB_CLASS: &str = "bg-white border-b-2 border-blue-500 text-blue-600";
const INACTIVE_TAB_CLASS: &str = "text-gray-600 hover:text-gray-900";

/// Paired textarea and preview for a markdown value owned by the parent.
///
/// The active tab is local state; the value only changes through
/// `on_change`, so switching tabs never alters it.
#[component]
pub fn MarkdownEditor(
    value: String,
    on_change: Callback<String>,
    #[props(default = DEFAULT_PLACEHOLDER.to_string())] placeholder: String,
    #[props(default = true)] show_preview: bool,
    #[props(default = EMPTY_PREVIEW_MESSAGE.to_string())] empty_preview_message: String,
    #[props(default)] format_version: FormatVersion,
    #[props(default)] initial_tab: EditorTab,
    class: Option<String>,
) -> Element {
    let mut tab = use_signal(|| initial_tab);

    let shell = EditorShell::new(value)
        .with_placeholder(placeholder)
        .with_empty_preview_message(empty_preview_message)
        .with_format_version(format_version)
        .with_preview_toggle(show_preview)
        .with_tab(tab());
    let active = shell.tab();
    let container_class = match class {
        Some(extra) => format!("border rounded-lg overflow-hidden {extra}"),
        None => "border rounded-lg overflow-hidden".to_string(),
    };

    rsx! {
        div {
            class: "{container_class}",
            if !shell.tabs().is_empty() {
                div {
                    class: "flex border-b bg-gray-50",
                    for t in shell.tabs().iter().copied() {
                        button {
                            r#type: "button",
                            class: tab_class(t == active),
                            onclick: move |_| tab.set(t),
                            {t.label()}
                        }
                    }
                }
            }
            div {
                class: "min-h-[200px]",
                {render_view(&shell, on_change)}
            }
            if shell.shows_hints() {
                SyntaxHints {}
            }
        }
    }
}

fn tab_class(active: bool) -> String {
    let state = if active {
        ACTIVE_TAB_CLASS
    } else {
        INACTIVE_TAB_CLASS
    };
    format!("{TAB_CLASS} {state}")
}

/// Stores textarea input in the shell and returns the value to report upward.
fn apply_input(shell: &mut EditorShell, input: String) -> String {
    shell.edit(input).to_string()
}

fn render_view(shell: &EditorShell, on_change: Callback<String>) -> Element {
    match shell.view() {
        ShellView::Editing { value, placeholder } => {
            let mut draft = shell.clone();
            rsx! {
                textarea {
                    class: "w-full h-full min-h-[200px] p-4 border-0 resize-none focus:outline-none focus:ring-0",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    spellcheck: false,
                    oninput: move |event: Event<FormData>| {
                        on_change.call(apply_input(&mut draft, event.value()))
                    },
                }
            }
        }
        ShellView::Preview(doc) => rsx! {
            div {
                class: "p-4 min-h-[200px]",
                MarkdownDocument { doc, variant: Variant::Default }
            }
        },
        ShellView::EmptyPreview(message) => rsx! {
            div {
                class: "p-4 min-h-[200px]",
                p { class: Variant::Default.classes(Slot::EmptyPreview), "{message}" }
            }
        },
    }
}

/// Cheat sheet of the supported syntax, each sample styled as it renders.
#[component]
fn SyntaxHints() -> Element {
    rsx! {
        div {
            class: "border-t bg-gray-50 px-4 py-2",
            div {
                class: "flex flex-wrap gap-4 text-xs text-gray-600",
                for hint in SYNTAX_HINTS {
                    span { {render_hint(hint)} }
                }
            }
        }
    }
}

fn render_hint(hint: SyntaxHint) -> Element {
    match hint.style {
        InlineStyle::Bold => rsx! { strong { "{hint.sample}" } },
        InlineStyle::Italic => rsx! { em { "{hint.sample}" } },
        InlineStyle::Code => rsx! { code { "{hint.sample}" } },
        InlineStyle::Plain => rsx! { "{hint.sample}" },
    }
}
