//! Server API
//!
//! HTTP binding for the item upload endpoint.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::SubmissionPayload;

const ITEMS_ENDPOINT: &str = "/items";

/// POST the payload to `/items` as JSON and return the parsed response.
///
/// The response body is parsed whatever the HTTP status; only transport
/// failures and non-JSON bodies surface as errors.
pub async fn submit_items(payload: &SubmissionPayload) -> Result<serde_json::Value, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(ITEMS_ENDPOINT, &opts).map_err(|err| format!("{err:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| format!("{err:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| format!("{err:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    let json = JsFuture::from(response.json().map_err(|err| format!("{err:?}"))?)
        .await
        .map_err(|err| format!("{err:?}"))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
