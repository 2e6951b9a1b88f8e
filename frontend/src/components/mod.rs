//! Browser-facing components.
//!
//! # Import page
//! - [`ImportConsole`] - Import button wiring and live SSE log
//! - [`ImportLog`] - The rendered log lines
//!
//! # Upload preview
//! - [`PreviewModal`] - Controller owning the delete binding
//! - [`DomSurface`] - The modal's resolved elements
//! - `showImagePreview` - JS entry point used by the upload lists

mod import_console;
mod preview_modal;
mod preview_dom;

pub use import_console::*;
pub use preview_modal::*;
pub use preview_dom::*;
