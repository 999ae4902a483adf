//! File Download
//!
//! Offers a string as a file via a temporary object URL and anchor click.

use wasm_bindgen::{JsCast, JsValue};

use super::js_error;

pub fn download_file(file_name: &str, contents: &str, mime_type: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let link = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    link.set_href(&url);
    link.set_download(file_name);

    body.append_child(&link).map_err(js_error)?;
    link.click();
    body.remove_child(&link).map_err(js_error)?;
    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}
