use super::state::UploadFailure;
use crate::shared::api_utils::api_url;
use contracts::usecases::u501_upload_document::{
    ErrorResponse, UploadResponse, UPLOAD_FIELD, UPLOAD_PATH,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// POST /upload: send the document for text extraction
///
/// The `multipart/form-data` content type (with its boundary) is set by the
/// browser from the `FormData` body.
pub async fn upload_document(file: web_sys::File) -> Result<UploadResponse, UploadFailure> {
    let window = web_sys::window().ok_or_else(|| transport("no window"))?;

    let form_data = FormData::new().map_err(|e| transport(&describe_js_error(&e)))?;
    form_data
        .append_with_blob(UPLOAD_FIELD, &file)
        .map_err(|e| transport(&describe_js_error(&e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url(UPLOAD_PATH);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| transport(&describe_js_error(&e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| transport(&describe_js_error(&e)))?;

    log::debug!("Uploading {} ({} bytes) to {}", file.name(), file.size(), url);

    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| transport(&describe_js_error(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| transport("fetch did not return a Response"))?;

    let status = resp.status();
    let text = match resp.text() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    decode_response(status, resp.ok(), &text)
}

/// Interpret status and body of the upload response
pub fn decode_response(status: u16, ok: bool, body: &str) -> Result<UploadResponse, UploadFailure> {
    if ok {
        return serde_json::from_str::<UploadResponse>(body).map_err(|e| {
            log::warn!("Malformed upload response (HTTP {}): {}", status, e);
            UploadFailure {
                status: Some(status),
                detail: None,
            }
        });
    }

    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.detail);
    log::warn!("Upload failed with HTTP {}: {:?}", status, detail);

    Err(UploadFailure {
        status: Some(status),
        detail,
    })
}

fn transport(reason: &str) -> UploadFailure {
    log::error!("Upload request failed: {}", reason);
    UploadFailure::network()
}

fn describe_js_error(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
