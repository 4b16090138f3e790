//! Picture Encoding
//!
//! Converts a selected file to base64 text via the browser FileReader.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, ProgressEvent};

/// Read a file and return its bytes as base64, without the
/// `data:<mime>;base64,` header the reader produces.
///
/// One-shot: resolves when the underlying read completes, errors if the
/// read fails to start or the reader reports an error.
pub async fn encode_file(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|err| format!("{err:?}"))?;

    let promise = Promise::new(&mut |resolve, reject| {
        let target = reader.clone();
        let reject_on_load = reject.clone();
        let onload = Closure::once_into_js(move |_: ProgressEvent| {
            match target.result() {
                Ok(value) => {
                    let _ = resolve.call1(&JsValue::UNDEFINED, &value);
                }
                Err(err) => {
                    let _ = reject_on_load.call1(&JsValue::UNDEFINED, &err);
                }
            }
        });
        let onerror = Closure::once_into_js(move |_: ProgressEvent| {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("file read failed"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|err| format!("{err:?}"))?;

    let value = JsFuture::from(promise)
        .await
        .map_err(|err| format!("{err:?}"))?;
    let data_url = value
        .as_string()
        .ok_or_else(|| "FileReader returned a non-string result".to_string())?;

    strip_data_url_prefix(&data_url)
        .map(str::to_owned)
        .ok_or_else(|| "malformed data URL from FileReader".to_string())
}

/// Keep only the encoded bytes of a data URL, dropping everything up to
/// and including the first `,`.
pub fn strip_data_url_prefix(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, encoded)| encoded)
}
