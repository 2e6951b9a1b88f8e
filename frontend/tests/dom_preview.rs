#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use qis_frontend::config::*;
use qis_frontend::{
    close_image_preview, init_preview_modal, mount_import_console, show_image_preview, AppError,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, HtmlAnchorElement, HtmlDialogElement, HtmlElement, HtmlIFrameElement,
    HtmlInputElement,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn reset_body() {
    document().body().unwrap().set_inner_html("");
}

fn add(tag: &str, id: &str) {
    let doc = document();
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
}

fn add_preview_markup() {
    add("dialog", PREVIEW_DIALOG_ID);
    add("span", PREVIEW_TITLE_ID);
    add("iframe", PREVIEW_FRAME_ID);
    add("a", PREVIEW_OPEN_URL_ID);
    add("a", PREVIEW_OPEN_THUMB_ID);
    add("a", PREVIEW_BUBBLE_PNG_ID);
    add("a", PREVIEW_BUBBLE_GIF_ID);
    add("a", PREVIEW_DELETE_ID);
    add("button", PREVIEW_CLOSE_ID);
    add("p", PREVIEW_DETAILS_ID);
}

fn get<T: JsCast>(id: &str) -> T {
    document().get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

fn href(id: &str) -> String {
    let a: HtmlAnchorElement = get(id);
    a.get_attribute("href").unwrap_or_default()
}

fn show_cat() -> bool {
    show_image_preview(
        "cat.png".into(),
        "abc123".into(),
        ".png".into(),
        "image/png".into(),
        0.0,
        "tok".into(),
    )
}

#[wasm_bindgen_test]
fn preview_populates_modal() {
    reset_body();
    add_preview_markup();
    init_preview_modal(&document());

    assert!(show_cat());

    let title: HtmlElement = get(PREVIEW_TITLE_ID);
    assert_eq!(title.inner_text(), "cat.png");
    let frame: HtmlIFrameElement = get(PREVIEW_FRAME_ID);
    assert_eq!(frame.get_attribute("src").as_deref(), Some("/f/abc123.png"));
    assert_eq!(href(PREVIEW_OPEN_URL_ID), "/f/abc123.png");
    assert_eq!(href(PREVIEW_OPEN_THUMB_ID), "/thumb/abc123.png");
    assert_eq!(href(PREVIEW_BUBBLE_PNG_ID), "/bubble/abc123.png");
    assert_eq!(href(PREVIEW_BUBBLE_GIF_ID), "/bubble/abc123.gif");

    let details: HtmlElement = get(PREVIEW_DETAILS_ID);
    assert_eq!(
        details.inner_text(),
        "image/png · uploaded Thu, 01 Jan 1970 00:00:00 UTC"
    );

    let dialog: HtmlDialogElement = get(PREVIEW_DIALOG_ID);
    assert!(dialog.open());

    // close button, twice
    let close: HtmlElement = get(PREVIEW_CLOSE_ID);
    close.click();
    assert!(!dialog.open());
    close.click();
    assert!(!dialog.open());

    // reopen and dismiss from script
    assert!(show_cat());
    assert!(dialog.open());
    close_image_preview();
    assert!(!dialog.open());
}

#[wasm_bindgen_test]
fn preview_without_markup_returns_false() {
    reset_body();
    add("span", PREVIEW_TITLE_ID);
    init_preview_modal(&document());

    assert!(!show_cat());
    let title: HtmlElement = get(PREVIEW_TITLE_ID);
    assert_eq!(title.inner_text(), "");
}

#[wasm_bindgen_test]
fn preview_with_wrong_element_type_returns_false() {
    reset_body();
    add_preview_markup();
    // a <div> where the dialog should be
    let dialog = document().get_element_by_id(PREVIEW_DIALOG_ID).unwrap();
    dialog.remove();
    add("div", PREVIEW_DIALOG_ID);
    init_preview_modal(&document());

    assert!(!show_cat());
    assert_eq!(href(PREVIEW_OPEN_URL_ID), "");
}

#[wasm_bindgen_test]
fn import_console_needs_its_elements() {
    reset_body();
    add("button", IMPORT_BUTTON_ID);
    let err = mount_import_console(&document()).unwrap_err();
    assert!(matches!(err, AppError::MissingElement(id) if id == IMPORT_INPUT_ID));

    add("input", IMPORT_INPUT_ID);
    add("div", IMPORT_CONSOLE_ID);
    assert!(mount_import_console(&document()).is_ok());

    let button: HtmlElement = get(IMPORT_BUTTON_ID);
    assert!(!button.has_attribute("disabled"));
}

#[wasm_bindgen_test(async)]
async fn import_click_disarms_until_stream_drops() {
    reset_body();
    add("button", IMPORT_BUTTON_ID);
    add("input", IMPORT_INPUT_ID);
    add("div", IMPORT_CONSOLE_ID);
    mount_import_console(&document()).unwrap();

    // hold the elements; other tests may clear the body while we wait
    let button: HtmlElement = get(IMPORT_BUTTON_ID);
    let container: HtmlElement = get(IMPORT_CONSOLE_ID);
    let input: HtmlInputElement = get(IMPORT_INPUT_ID);
    input.set_value("missing file.zip");

    button.click();
    assert!(button.has_attribute("disabled"));

    // the test server has no /import-api, so the stream errors out
    for _ in 0..100 {
        if !button.has_attribute("disabled") {
            break;
        }
        TimeoutFuture::new(50).await;
    }
    assert!(!button.has_attribute("disabled"));

    // give any further error events a chance to fire
    TimeoutFuture::new(200).await;
    let info = container.get_elements_by_class_name("info");
    assert_eq!(info.length(), 1);
    assert_eq!(
        info.item(0).unwrap().text_content().as_deref(),
        Some("[INFO] Connection Dropped. Re-Enabling the button...")
    );

    // re-armed: a second click opens a new stream
    button.click();
    assert!(button.has_attribute("disabled"));
}
