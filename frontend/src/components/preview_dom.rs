//! Browser side of the preview modal.
//!
//! Resolves the modal's elements once at load time and exposes
//! `showImagePreview` and `closeImagePreview` to the server-rendered pages.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlAnchorElement, HtmlDialogElement, HtmlElement, HtmlIFrameElement,
};

use crate::components::{close_shared, show_shared, PreviewLink, PreviewModal, PreviewSurface};
use crate::config::*;
use crate::services::{run_delete_flow, BrowserEnv};
use crate::types::{AppError, AppResult, DeleteTarget, PreviewTarget};

thread_local! {
    static PREVIEW: RefCell<PreviewModal<DomSurface>> = RefCell::new(PreviewModal::detached());
}

/// Looks up `#id` and casts it to `T`.
pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> AppResult<T> {
    document
        .get_element_by_id(id)
        .ok_or(AppError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| AppError::WrongElement { id, expected })
}

/// The modal's elements, resolved once.
pub struct DomSurface {
    dialog: HtmlDialogElement,
    title: HtmlElement,
    frame: HtmlIFrameElement,
    open_url: HtmlAnchorElement,
    open_thumb: HtmlAnchorElement,
    bubble_png: HtmlAnchorElement,
    bubble_gif: HtmlAnchorElement,
    delete: HtmlElement,
    details: Option<HtmlElement>,
}

impl DomSurface {
    /// Fails on the first required element that is missing or mistyped.
    pub fn resolve(document: &Document) -> AppResult<Self> {
        Ok(Self {
            dialog: element_by_id(document, PREVIEW_DIALOG_ID, "HtmlDialogElement")?,
            title: element_by_id(document, PREVIEW_TITLE_ID, "HtmlElement")?,
            frame: element_by_id(document, PREVIEW_FRAME_ID, "HtmlIFrameElement")?,
            open_url: element_by_id(document, PREVIEW_OPEN_URL_ID, "HtmlAnchorElement")?,
            open_thumb: element_by_id(document, PREVIEW_OPEN_THUMB_ID, "HtmlAnchorElement")?,
            bubble_png: element_by_id(document, PREVIEW_BUBBLE_PNG_ID, "HtmlAnchorElement")?,
            bubble_gif: element_by_id(document, PREVIEW_BUBBLE_GIF_ID, "HtmlAnchorElement")?,
            delete: element_by_id(document, PREVIEW_DELETE_ID, "HtmlElement")?,
            details: element_by_id(document, PREVIEW_DETAILS_ID, "HtmlElement").ok(),
        })
    }

    fn anchor(&self, link: PreviewLink) -> &HtmlAnchorElement {
        match link {
            PreviewLink::OpenUrl => &self.open_url,
            PreviewLink::OpenThumbnail => &self.open_thumb,
            PreviewLink::BubblePng => &self.bubble_png,
            PreviewLink::BubbleGif => &self.bubble_gif,
        }
    }
}

impl PreviewSurface for DomSurface {
    type Binding = Closure<dyn FnMut(Event)>;

    fn set_title(&self, title: &str) {
        self.title.set_inner_text(title);
    }

    fn set_frame_src(&self, src: &str) {
        self.frame.set_src(src);
    }

    fn set_link(&self, link: PreviewLink, href: &str) {
        self.anchor(link).set_href(href);
    }

    fn set_details(&self, text: &str) {
        if let Some(details) = &self.details {
            details.set_inner_text(text);
        }
    }

    fn bind_delete(&self, target: DeleteTarget) -> Self::Binding {
        let handler = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let target = target.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = run_delete_flow(&BrowserEnv, &target).await;
                log::debug!("Delete of {} finished: {:?}", target.name, outcome);
            });
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) = self
            .delete
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        {
            log::error!("Failed to bind delete handler: {}", AppError::from(e));
        }
        handler
    }

    fn unbind_delete(&self, binding: Self::Binding) {
        if let Err(e) = self
            .delete
            .remove_event_listener_with_callback("click", binding.as_ref().unchecked_ref())
        {
            log::error!("Failed to unbind delete handler: {}", AppError::from(e));
        }
    }

    fn open(&self) {
        if let Err(e) = self.dialog.show_modal() {
            log::error!("Failed to open preview modal: {}", AppError::from(e));
        }
    }

    fn close(&self) {
        if self.dialog.open() {
            self.dialog.close();
        }
    }
}

/// Shows the preview modal for one upload.
///
/// Returns `false` when the page is missing any of the modal's elements.
#[wasm_bindgen(js_name = showImagePreview)]
pub fn show_image_preview(
    name: String,
    id: String,
    ext: String,
    mime_type: String,
    uploaded_at: f64,
    delete_token: String,
) -> bool {
    let target = PreviewTarget {
        name,
        id,
        ext,
        mime_type,
        uploaded_at: uploaded_at as i64,
        delete_token,
    };
    PREVIEW.with(|modal| show_shared(modal, &target))
}

/// Closes the preview modal if it is open.
#[wasm_bindgen(js_name = closeImagePreview)]
pub fn close_image_preview() {
    PREVIEW.with(|modal| close_shared(modal));
}

/// Resolves the modal, binds its close button and runs the page's
/// extension hook. Called once per page load.
pub fn init_preview_modal(document: &Document) {
    let modal = match DomSurface::resolve(document) {
        Ok(surface) => PreviewModal::new(surface),
        Err(e) => {
            log::debug!("Preview modal not available on this page: {}", e);
            PreviewModal::detached()
        }
    };
    PREVIEW.with(|slot| *slot.borrow_mut() = modal);

    match element_by_id::<HtmlElement>(document, PREVIEW_CLOSE_ID, "HtmlElement") {
        Ok(button) => {
            let onclick = Closure::wrap(Box::new(move |_: Event| {
                close_image_preview();
            }) as Box<dyn FnMut(Event)>);
            if let Err(e) =
                button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            {
                log::error!("Failed to bind close button: {}", AppError::from(e));
            }
            // lives as long as the page
            onclick.forget();
        }
        Err(e) => log::debug!("{}", e),
    }

    run_extension_hook();
}

/// Calls `window.extraload()` if the host page defined it.
fn run_extension_hook() {
    let window = gloo_utils::window();
    let Ok(hook) = js_sys::Reflect::get(&window, &JsValue::from_str(EXTENSION_HOOK)) else {
        return;
    };
    if let Some(hook) = hook.dyn_ref::<js_sys::Function>() {
        log::debug!("Running {} hook", EXTENSION_HOOK);
        if let Err(e) = hook.call0(&JsValue::NULL) {
            log::error!("{} hook threw: {}", EXTENSION_HOOK, AppError::from(e));
        }
    }
}
