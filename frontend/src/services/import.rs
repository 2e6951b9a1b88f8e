//! Import trigger state.
//!
//! The import button is a one-shot trigger: clicking it opens exactly one
//! SSE stream and disarms it until that stream drops. The DOM layer in
//! [`crate::components::import_console`] consults this state on every
//! click and error event; nothing here touches the browser.

use crate::config::{
    IMPORT_CONNECTION_DROPPED, IMPORT_DECODE_FAILURE, IMPORT_ENDPOINT, IMPORT_FILE_PARAM,
};
use crate::types::{AppResult, ImportLine, ImportMessage};

/// Builds the stream URL for `file_name`, percent-encoding it verbatim.
pub fn import_url(file_name: &str) -> String {
    format!(
        "{}?{}={}",
        IMPORT_ENDPOINT,
        IMPORT_FILE_PARAM,
        urlencoding::encode(file_name)
    )
}

/// Decodes one SSE payload.
pub fn parse_import_message(data: &str) -> AppResult<ImportLine> {
    let msg: ImportMessage = serde_json::from_str(data)?;
    Ok(msg.into())
}

/// Decodes one SSE payload, substituting a `fail` line on error.
///
/// The failure is logged; it never ends the stream.
pub fn decode_line(data: &str) -> ImportLine {
    match parse_import_message(data) {
        Ok(line) => line,
        Err(e) => {
            log::error!("{} (payload: {:?})", e, data);
            ImportLine::fail(IMPORT_DECODE_FAILURE)
        }
    }
}

/// Identifies one stream opened by the trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TriggerState {
    Armed,
    Streaming(ConnectionId),
}

/// Arm/disarm state of the import button.
#[derive(Debug)]
pub struct ImportTrigger {
    state: TriggerState,
    next_id: u64,
}

impl ImportTrigger {
    pub fn new() -> Self {
        Self {
            state: TriggerState::Armed,
            next_id: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state == TriggerState::Armed
    }

    /// Disarms and returns the stream to open, or `None` while a stream
    /// is already live.
    pub fn activate(&mut self, file_name: &str) -> Option<(ConnectionId, String)> {
        if !self.is_armed() {
            log::debug!("Import already running, ignoring activation");
            return None;
        }
        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        self.state = TriggerState::Streaming(id);
        Some((id, import_url(file_name)))
    }

    /// Records that stream `id` dropped.
    ///
    /// Returns the line to append and re-arms only the first time the live
    /// stream reports an error; later errors and stale ids yield `None`.
    pub fn drop_connection(&mut self, id: ConnectionId) -> Option<ImportLine> {
        if self.state != TriggerState::Streaming(id) {
            return None;
        }
        self.state = TriggerState::Armed;
        Some(ImportLine::info(IMPORT_CONNECTION_DROPPED))
    }
}

impl Default for ImportTrigger {
    fn default() -> Self {
        Self::new()
    }
}
