//! Import console driven by Server-Sent Events (SSE).
//!
//! Binds to the import page's button, text field and console container.
//! Clicking the button streams `/import-api` into the console until the
//! connection drops, then re-enables the button for another attempt.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventSource, EventSourceInit, HtmlElement, HtmlInputElement, MessageEvent,
};

use crate::components::element_by_id;
use crate::config::{IMPORT_BUTTON_ID, IMPORT_CONSOLE_ID, IMPORT_INPUT_ID};
use crate::services::{decode_line, ConnectionId, ImportTrigger};
use crate::types::{AppError, AppResult, ImportLine};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Err(e) = gloo_utils::window().request_animation_frame(closure.as_ref().unchecked_ref())
    {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

/// A stream opened by the trigger, kept alive with its callbacks.
struct LiveStream {
    source: EventSource,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(Event)>,
}

impl Drop for LiveStream {
    fn drop(&mut self) {
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        self.source.close();
    }
}

fn set_armed(button: &HtmlElement, armed: bool) {
    if let Err(e) = button.toggle_attribute_with_force("disabled", !armed) {
        log::warn!("Failed to toggle import button: {}", AppError::from(e));
    }
}

fn open_event_source(url: &str) -> AppResult<EventSource> {
    let init = EventSourceInit::new();
    init.set_with_credentials(true);
    Ok(EventSource::new_with_event_source_init_dict(url, &init)?)
}

/// Console lines, rendered in arrival order.
#[component]
pub fn ImportLog(
    /// Lines received so far
    lines: ReadSignal<Vec<ImportLine>>,
    /// Host container that scrolls
    container: HtmlElement,
) -> impl IntoView {
    // Keep the newest line in view
    create_effect(move |_| {
        let _ = lines.get();
        let container = container.clone();
        request_animation_frame(move || {
            container.set_scroll_top(container.scroll_height());
        });
    });

    view! {
        <For
            each=move || lines.get().into_iter().enumerate()
            key=|(i, _)| *i
            children=move |(_, line)| {
                view! { <pre class=line.css_class()>{line.label()}</pre> }
            }
        />
    }
}

/// Wires the import button and mounts the log into the console container.
#[component]
pub fn ImportConsole(
    button: HtmlElement,
    input: HtmlInputElement,
    container: HtmlElement,
) -> impl IntoView {
    let (lines, set_lines) = create_signal(Vec::<ImportLine>::new());
    let trigger = Rc::new(RefCell::new(ImportTrigger::new()));
    let live: Rc<RefCell<Option<LiveStream>>> = Rc::new(RefCell::new(None));

    let push = move |line: ImportLine| set_lines.update(|lines| lines.push(line));

    // Ends stream `id` at most once.
    let on_drop = {
        let trigger = trigger.clone();
        let button = button.clone();
        move |id: ConnectionId, source: &EventSource| {
            let dropped = trigger.borrow_mut().drop_connection(id);
            let Some(line) = dropped else {
                return;
            };
            log::info!("Import stream dropped");
            push(line);
            source.close();
            set_armed(&button, true);
        }
    };

    let onclick = {
        let button = button.clone();
        Closure::wrap(Box::new(move |_: Event| {
            let activation = trigger.borrow_mut().activate(&input.value());
            let Some((id, url)) = activation else {
                return;
            };
            set_armed(&button, false);

            let source = match open_event_source(&url) {
                Ok(source) => source,
                Err(e) => {
                    log::error!("Failed to open import stream: {}", e);
                    if let Some(line) = trigger.borrow_mut().drop_connection(id) {
                        push(line);
                    }
                    set_armed(&button, true);
                    return;
                }
            };
            log::info!("Import stream opened: {}", url);

            let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
                let data = event.data().as_string().unwrap_or_default();
                push(decode_line(&data));
            }) as Box<dyn FnMut(MessageEvent)>);
            source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

            let onerror = {
                let on_drop = on_drop.clone();
                let source = source.clone();
                Closure::wrap(Box::new(move |_: Event| {
                    on_drop(id, &source);
                }) as Box<dyn FnMut(Event)>)
            };
            source.set_onerror(Some(onerror.as_ref().unchecked_ref()));

            // The previous stream has already dropped; none of its
            // callbacks is running while we replace it.
            live.borrow_mut().replace(LiveStream {
                source,
                _onmessage: onmessage,
                _onerror: onerror,
            });
        }) as Box<dyn FnMut(Event)>)
    };

    if let Err(e) =
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
    {
        log::error!("Failed to bind import button: {}", AppError::from(e));
    }
    // the button lives as long as the page
    onclick.forget();

    view! { <ImportLog lines=lines container=container/> }
}

/// Mounts the import console if this page has one.
pub fn mount_import_console(document: &Document) -> AppResult<()> {
    let button: HtmlElement = element_by_id(document, IMPORT_BUTTON_ID, "HtmlElement")?;
    let input: HtmlInputElement = element_by_id(document, IMPORT_INPUT_ID, "HtmlInputElement")?;
    let container: HtmlElement = element_by_id(document, IMPORT_CONSOLE_ID, "HtmlElement")?;

    log::info!("Mounting import console");
    let parent = container.clone();
    mount_to(parent, move || {
        view! { <ImportConsole button=button input=input container=container/> }
    });
    Ok(())
}
