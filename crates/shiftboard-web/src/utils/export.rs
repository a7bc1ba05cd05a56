//! Browser download helpers for generated report files

use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

/// Download text content (CSV) under a fixed filename.
pub fn download_text(content: &str, filename: &str, mime_type: &str) {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);

    match Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => click_download(&blob, filename),
        Err(e) => log::error!("failed to create blob: {:?}", e),
    }
}

/// Download binary content (PDF) under a fixed filename.
pub fn download_bytes(bytes: &[u8], filename: &str, mime_type: &str) {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);

    match Blob::new_with_buffer_source_sequence_and_options(&parts, &options) {
        Ok(blob) => click_download(&blob, filename),
        Err(e) => log::error!("failed to create blob: {:?}", e),
    }
}

/// Point a temporary anchor at the blob and click it.
fn click_download(blob: &Blob, filename: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::error!("failed to get document object");
            return;
        }
    };

    let url = match Url::create_object_url_with_blob(blob) {
        Ok(u) => u,
        Err(e) => {
            log::error!("failed to create object URL: {:?}", e);
            return;
        }
    };

    let anchor = match document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    {
        Some(a) => a,
        None => {
            log::error!("failed to create anchor element");
            let _ = Url::revoke_object_url(&url);
            return;
        }
    };

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    if let Err(e) = Url::revoke_object_url(&url) {
        log::error!("failed to revoke object URL: {:?}", e);
    }
}
