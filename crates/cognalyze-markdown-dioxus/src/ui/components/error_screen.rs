use dioxus::prelude::*;

const SCREEN_STYLE: &str = "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 24px; font-family: system-ui, sans-serif;";
const DETAILS_STYLE: &str = "max-width: 720px; text-align: left; white-space: pre-wrap; word-break: break-word; margin-top: 16px; padding: 12px; background: #fdf6e3; border-radius: 6px;";

/// Shown instead of the editor when the config or the document can't be
/// loaded at startup.
///
/// `config_path` tells the user which file to fix; the window has to be
/// restarted afterwards.
#[component]
pub fn ErrorScreen(
    title: String,
    message: String,
    details: Option<String>,
    config_path: Option<String>,
) -> Element {
    rsx! {
        div {
            style: SCREEN_STYLE,
            h1 { style: "color: #dc322f; margin-bottom: 8px;", "{title}" }
            p { "{message}" }
            if let Some(detail_text) = &details {
                pre { style: DETAILS_STYLE, "{detail_text}" }
            }
            if let Some(path) = &config_path {
                p {
                    class: "config-path",
                    style: "margin-top: 16px; color: #657b83; font-size: 0.875rem;",
                    "Config file: "
                    code { "{path}" }
                }
            }
            p {
                style: "margin-top: 8px; color: #657b83; font-size: 0.875rem;",
                "Fix the problem above and restart cognalyze-markdown."
            }
        }
    }
}
