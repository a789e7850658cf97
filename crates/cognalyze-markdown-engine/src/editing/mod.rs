//! # Editor Shell
//!
//! UI-independent state for the paired editor/preview surface.
//!
//! The shell owns the raw markdown value and which tab is showing. Front ends
//! (the Dioxus `MarkdownEditor`, the terminal previewer) drive it through
//! [`EditorShell::edit`], [`EditorShell::select`] and [`EditorShell::toggle`]
//! and render whatever [`EditorShell::view`] returns.
//!
//! Switching tabs never touches the value: an edit -> preview -> edit round
//! trip leaves it byte-identical.

pub mod shell;

pub use shell::{
    DEFAULT_PLACEHOLDER, EMPTY_PREVIEW_MESSAGE, EditorShell, EditorTab, SYNTAX_HINTS, ShellView,
    SyntaxHint,
};
