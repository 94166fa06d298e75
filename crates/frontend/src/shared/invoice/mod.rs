//! Invoice document generation and printing.
//!
//! `template::render_invoice` is a pure function from an order and a paper
//! profile to a self-contained HTML document; this module opens it in a new
//! browser window through a Blob object URL. The document auto-prints on
//! load. A blocked popup fails the whole operation with no partial output.

pub mod paper;
pub mod template;

pub use paper::PaperProfile;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

use contracts::domain::a004_order::aggregate::Order;

pub fn print_invoice(order: &Order, profile: PaperProfile) -> Result<(), String> {
    let html = template::render_invoice(order, profile);
    open_print_surface(&html)
}

fn open_print_surface(html: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(html));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/html;charset=utf-8");

    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create invoice document: {e:?}"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create document URL: {e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let opened = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open print window: {e:?}"))?;

    if opened.is_none() {
        let _ = Url::revoke_object_url(&url);
        return Err("The print window was blocked by the browser".to_string());
    }

    // The blob URL must outlive the new window's load; release it later.
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(60_000).await;
        let _ = Url::revoke_object_url(&url);
    });

    Ok(())
}
