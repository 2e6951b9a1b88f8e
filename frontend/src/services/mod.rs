//! Browser-independent logic and network services.
//!
//! # Services
//!
//! - [`assets`] - URL conventions for uploads and their derived images
//! - [`import`] - Import trigger state and SSE payload decoding
//! - [`delete`] - Confirm-then-delete flow

pub mod assets;
pub mod import;
pub mod delete;

pub use assets::*;
pub use import::*;
pub use delete::*;
