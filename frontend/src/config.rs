//! Application configuration.
//!
//! Centralized constants for the quick-image-server frontend: endpoint
//! prefixes, the element IDs the host pages provide, and user-facing texts.
//! The URL layout must match what the server routes.

/// Console log level for the `console_log` backend.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

// =============================================================================
// Endpoints
// =============================================================================

/// SSE endpoint streaming import progress.
pub const IMPORT_ENDPOINT: &str = "/import-api";

/// Query parameter carrying the file to import.
pub const IMPORT_FILE_PARAM: &str = "fileName";

/// Canonical upload URL prefix, followed by `{id}{ext}`.
pub const FILE_PREFIX: &str = "/f/";

/// Thumbnail prefix, followed by `{id}.png`.
pub const THUMB_PREFIX: &str = "/thumb/";

/// Bubble variant prefix, followed by `{id}.png` or `{id}.gif`.
pub const BUBBLE_PREFIX: &str = "/bubble/";

/// Delete prefix, followed by `{id}/{deleteToken}`.
pub const DELETE_PREFIX: &str = "/delete/";

// =============================================================================
// Import page elements
// =============================================================================

pub const IMPORT_BUTTON_ID: &str = "import-button";
pub const IMPORT_CONSOLE_ID: &str = "import-console";
pub const IMPORT_INPUT_ID: &str = "import-entry";

// =============================================================================
// Preview modal elements
// =============================================================================

pub const PREVIEW_DIALOG_ID: &str = "upload-preview-modal";
pub const PREVIEW_TITLE_ID: &str = "upload-preview-modal-title";
pub const PREVIEW_FRAME_ID: &str = "upload-preview-modal-preview-container";
pub const PREVIEW_OPEN_URL_ID: &str = "upload-preview-btn-open-url";
pub const PREVIEW_OPEN_THUMB_ID: &str = "upload-preview-btn-open-thumb";
pub const PREVIEW_BUBBLE_PNG_ID: &str = "upload-preview-btn-open-bubbled-png";
pub const PREVIEW_BUBBLE_GIF_ID: &str = "upload-preview-btn-open-bubbled-gif";
pub const PREVIEW_DELETE_ID: &str = "upload-preview-btn-delete";
pub const PREVIEW_CLOSE_ID: &str = "upload-preview-close-button";

/// Optional element receiving the mime type and upload date.
pub const PREVIEW_DETAILS_ID: &str = "upload-preview-modal-details";

/// Page-global function invoked once after the preview modal is wired.
pub const EXTENSION_HOOK: &str = "extraload";

// =============================================================================
// Messages
// =============================================================================

/// Shown in the import console when a stream event cannot be decoded.
pub const IMPORT_DECODE_FAILURE: &str = "Error while doing import. Please check JS console.";

/// Shown in the import console when the stream ends.
pub const IMPORT_CONNECTION_DROPPED: &str = "Connection Dropped. Re-Enabling the button...";

/// Alert when the delete request never got a response.
pub const DELETE_TRANSPORT_FAILURE: &str = "Failed to delete the file. Please check your JS console.";

/// Alert when the server answered the delete request with a non-200 status.
pub const DELETE_STATUS_FAILURE: &str = "Failed to delete the file. Received non-200 error code.";

/// Confirmation prompt shown before deleting `name`.
pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to PERMANENTLY delete {}?", name)
}
