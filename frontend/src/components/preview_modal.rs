//! Upload preview modal controller.
//!
//! The controller owns the only delete binding on the modal's delete
//! control. Showing another upload always unbinds the previous handler
//! before binding the new one, so a modal reused across uploads can never
//! delete a stale target.

use std::cell::RefCell;

use crate::services::AssetLinks;
use crate::types::{DeleteTarget, PreviewTarget};

/// Links populated on each preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewLink {
    OpenUrl,
    OpenThumbnail,
    BubblePng,
    BubbleGif,
}

/// The DOM the controller writes to.
pub trait PreviewSurface {
    /// Handle returned by [`PreviewSurface::bind_delete`], handed back to
    /// [`PreviewSurface::unbind_delete`].
    type Binding;

    fn set_title(&self, title: &str);
    fn set_frame_src(&self, src: &str);
    fn set_link(&self, link: PreviewLink, href: &str);
    /// Optional details line; surfaces without one ignore it.
    fn set_details(&self, text: &str);
    fn bind_delete(&self, target: DeleteTarget) -> Self::Binding;
    fn unbind_delete(&self, binding: Self::Binding);
    fn open(&self);
    /// Closes the dialog if it is open.
    fn close(&self);
}

pub struct PreviewModal<S: PreviewSurface> {
    surface: Option<S>,
    delete_binding: Option<S::Binding>,
}

impl<S: PreviewSurface> PreviewModal<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
            delete_binding: None,
        }
    }

    /// A controller whose required elements could not be resolved.
    pub fn detached() -> Self {
        Self {
            surface: None,
            delete_binding: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Populates and opens the modal for `target`.
    ///
    /// Returns `false` without touching anything when detached.
    pub fn show(&mut self, target: &PreviewTarget) -> bool {
        let shown = self.prepare(target);
        if shown {
            self.open();
        }
        shown
    }

    /// Writes `target` into the modal and rebinds delete, without opening.
    pub fn prepare(&mut self, target: &PreviewTarget) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            log::warn!("Preview modal is not attached, cannot show {}", target.name);
            return false;
        };

        let links = AssetLinks::derive(target);
        surface.set_title(&target.name);
        surface.set_frame_src(&links.file);
        surface.set_link(PreviewLink::OpenUrl, &links.file);
        surface.set_link(PreviewLink::OpenThumbnail, &links.thumbnail);
        surface.set_link(PreviewLink::BubblePng, &links.bubble_png);
        surface.set_link(PreviewLink::BubbleGif, &links.bubble_gif);
        surface.set_details(&target.details_line());

        self.rebind_delete(links.delete_target(&target.name));
        true
    }

    pub fn open(&self) {
        if let Some(surface) = self.surface.as_ref() {
            surface.open();
        }
    }

    /// Replaces the delete handler. The old binding is always released
    /// before the new one is attached.
    pub fn rebind_delete(&mut self, target: DeleteTarget) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        if let Some(previous) = self.delete_binding.take() {
            surface.unbind_delete(previous);
        }
        self.delete_binding = Some(surface.bind_delete(target));
    }

    pub fn close(&self) {
        if let Some(surface) = self.surface.as_ref() {
            surface.close();
        }
    }
}

/// [`PreviewModal::show`] on a shared controller.
///
/// Opening the dialog fires focus events synchronously, and page listeners
/// may call back into the controller. The mutable borrow ends before the
/// dialog opens; a call made while it is held returns `false`.
pub fn show_shared<S: PreviewSurface>(
    slot: &RefCell<PreviewModal<S>>,
    target: &PreviewTarget,
) -> bool {
    let prepared = match slot.try_borrow_mut() {
        Ok(mut modal) => modal.prepare(target),
        Err(_) => {
            log::warn!("Preview modal busy, cannot show {}", target.name);
            return false;
        }
    };
    if prepared {
        if let Ok(modal) = slot.try_borrow() {
            modal.open();
        }
    }
    prepared
}

/// [`PreviewModal::close`] on a shared controller. No-op while the
/// controller is being updated.
pub fn close_shared<S: PreviewSurface>(slot: &RefCell<PreviewModal<S>>) {
    match slot.try_borrow() {
        Ok(modal) => modal.close(),
        Err(_) => log::warn!("Preview modal busy, cannot close"),
    }
}
