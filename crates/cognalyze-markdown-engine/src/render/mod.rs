//! # Rendering
//!
//! Presentation shared by every front end.
//!
//! - **`variant`**: `Variant` density presets and their per-element CSS classes
//! - **`html`**: Standalone HTML output for non-UI consumers

pub mod html;
pub mod variant;

pub use html::{render_doc_html, render_html, render_inline_html};
pub use variant::{ParseVariantError, Slot, Variant};
