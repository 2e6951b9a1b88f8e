//! Confirm-then-delete flow for an upload.
//!
//! ```text
//! Confirming ──declined──▶ Aborted
//!     │
//!  accepted
//!     ▼
//! Requesting ──200──────▶ Deleted  (page reload)
//!     ├──────other──────▶ Rejected (alert)
//!     └──no response────▶ Transport (alert + console)
//! ```
//!
//! The browser side effects sit behind [`DeleteEnv`] so the sequence can be
//! driven without a DOM.

use gloo_net::http::Request;

use crate::config::{delete_prompt, DELETE_STATUS_FAILURE, DELETE_TRANSPORT_FAILURE};
use crate::types::{AppError, AppResult, DeleteOutcome, DeleteTarget};

/// Side effects the delete flow needs.
#[allow(async_fn_in_trait)]
pub trait DeleteEnv {
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
    /// Issues the delete request and yields the HTTP status.
    async fn request(&self, url: &str) -> AppResult<u16>;
    fn reload(&self);
}

/// Runs one delete attempt to completion.
pub async fn run_delete_flow<E: DeleteEnv>(env: &E, target: &DeleteTarget) -> DeleteOutcome {
    if !env.confirm(&delete_prompt(&target.name)) {
        log::debug!("Delete of {} declined", target.name);
        return DeleteOutcome::Aborted;
    }

    log::info!("Deleting {} via {}", target.name, target.url);
    match env.request(&target.url).await {
        Ok(200) => {
            env.reload();
            DeleteOutcome::Deleted
        }
        Ok(status) => {
            log::warn!("Delete of {} answered {}", target.name, status);
            env.alert(DELETE_STATUS_FAILURE);
            DeleteOutcome::Rejected(status)
        }
        Err(e) => {
            log::error!("Delete of {} failed: {}", target.name, e);
            env.alert(DELETE_TRANSPORT_FAILURE);
            DeleteOutcome::Transport(e.to_string())
        }
    }
}

/// [`DeleteEnv`] backed by the page's window.
pub struct BrowserEnv;

impl DeleteEnv for BrowserEnv {
    fn confirm(&self, message: &str) -> bool {
        gloo_utils::window()
            .confirm_with_message(message)
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }

    async fn request(&self, url: &str) -> AppResult<u16> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(response.status())
    }

    fn reload(&self) {
        if let Err(e) = gloo_utils::window().location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}
