pub mod block;
pub mod block_quote;
pub mod code_fence;
pub mod error_screen;
pub mod heading;
pub mod inline_spans;
pub mod list_component;
pub mod markdown_editor;
pub mod markdown_renderer;
pub mod paragraph;
pub mod spacer;
pub mod table;
pub mod thematic_break;

pub use error_screen::ErrorScreen;
pub use markdown_editor::MarkdownEditor;
pub use markdown_renderer::{MarkdownDocument, MarkdownRenderer};
