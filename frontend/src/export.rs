use log::info;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Serialize `records` as pretty JSON.
pub fn to_json<T: Serialize>(records: &[T]) -> Result<String, JsValue> {
    serde_json::to_string_pretty(records).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Offer `records` to the browser as a downloadable JSON file.
pub fn download_json<T: Serialize>(filename: &str, records: &[T]) -> Result<(), JsValue> {
    let body = to_json(records)?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&body));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let href = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&href);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&href)?;

    info!("Exported {} records to {}", records.len(), filename);
    Ok(())
}
