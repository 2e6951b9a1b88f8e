//! Common types used across the frontend.
//!
//! # Categories
//!
//! - **Import Types** - SSE payloads and rendered console lines
//! - **Preview Types** - Upload descriptors handed in by the host page
//! - **Error Types** - Frontend error handling

use chrono::DateTime;
use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Import Types
// =============================================================================

/// A single event payload from `/import-api`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImportMessage {
    /// Free-form tag such as `info` or `fail`.
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// A line rendered in the import console.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportLine {
    pub kind: String,
    pub content: String,
}

impl ImportLine {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new("info", content)
    }

    pub fn fail(content: impl Into<String>) -> Self {
        Self::new("fail", content)
    }

    /// Text shown for the line, e.g. `[INFO] Importing...`.
    pub fn label(&self) -> String {
        format!("[{}] {}", self.kind.to_uppercase(), self.content)
    }

    /// The kind as a single CSS class token.
    ///
    /// Characters outside `[A-Za-z0-9_-]` become `-` so a kind like
    /// `"a b"` cannot smuggle in a second class.
    pub fn css_class(&self) -> String {
        if self.kind.is_empty() {
            return "unknown".to_string();
        }
        self.kind
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl From<ImportMessage> for ImportLine {
    fn from(msg: ImportMessage) -> Self {
        Self::new(msg.kind, msg.content)
    }
}

// =============================================================================
// Preview Types
// =============================================================================

/// Upload descriptor passed to `showImagePreview`.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewTarget {
    /// Original file name, shown as the modal title.
    pub name: String,
    pub id: String,
    /// Extension including the leading dot, e.g. `.png`.
    pub ext: String,
    pub mime_type: String,
    /// Unix timestamp in seconds.
    pub uploaded_at: i64,
    pub delete_token: String,
}

impl PreviewTarget {
    /// `"{mime} · uploaded {RFC 1123}"`, as the dashboard formats dates.
    pub fn details_line(&self) -> String {
        let uploaded = DateTime::from_timestamp(self.uploaded_at, 0)
            .map(|dt| dt.format("%a, %d %b %Y %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| self.uploaded_at.to_string());
        format!("{} · uploaded {}", self.mime_type, uploaded)
    }
}

/// What a bound delete handler acts on.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteTarget {
    /// Shown in the confirmation prompt.
    pub name: String,
    pub url: String,
}

/// Terminal state of one delete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation.
    Aborted,
    /// Server answered 200; the page was reloaded.
    Deleted,
    /// Server answered with another status.
    Rejected(u16),
    /// The request never produced a response.
    Transport(String),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend errors.
///
/// None of these are fatal: callers render, alert or log them and leave
/// the page retryable.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// A required element is not in the document.
    #[error("Missing element #{0}")]
    MissingElement(&'static str),

    /// An element exists but has the wrong type.
    #[error("Element #{id} is not a {expected}")]
    WrongElement {
        id: &'static str,
        expected: &'static str,
    },

    /// An import event payload could not be decoded.
    #[error("Malformed import message: {0}")]
    MalformedMessage(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// A browser API call threw.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedMessage(err.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = js_sys::Reflect::get(&value, &"message".into())
            .ok()
            .and_then(|v| v.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Browser(message)
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
