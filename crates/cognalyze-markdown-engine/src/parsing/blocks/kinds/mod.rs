//! Block kinds with owned delimiters.
//!
//! All syntax knowledge for a block type lives with that type, not in the
//! classifier or builder.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceLine};
pub use heading::Heading;
pub use list::{ListItem, ListMarker};
pub use rule::ThematicBreak;
pub use table::{Alignment, Table};
