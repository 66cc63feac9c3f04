//! Browser fetch execution for HttpRequest values

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use verdant_network::{HttpRequest, HttpResponse, NetworkError};

use crate::logging;

/// Execute a request via the browser fetch API.
///
/// Never panics and never rejects: every failure mode is folded into the
/// response's error branch so service codecs can apply their fallbacks.
pub async fn execute(request: &HttpRequest) -> HttpResponse {
    match try_execute(request).await {
        Ok(mut response) => {
            response.request_id = request.request_id;
            response
        }
        Err(err) => {
            logging::warn(&format!(
                "fetch failed for {}: {:?}",
                request.url,
                err.as_string().unwrap_or_default()
            ));
            let mut response = HttpResponse::err(NetworkError::ConnectionFailed);
            response.request_id = request.request_id;
            response
        }
    }
}

async fn try_execute(request: &HttpRequest) -> Result<HttpResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    if let Some(body) = &request.body {
        let array = js_sys::Uint8Array::from(body.as_slice());
        opts.set_body(&array.into());
    }

    let js_request = Request::new_with_str_and_init(&request.url, &opts)?;
    for (key, value) in &request.headers {
        js_request.headers().set(key, value)?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response_value = JsFuture::from(window.fetch_with_request(&js_request)).await?;
    let response: Response = response_value.dyn_into()?;

    let buffer = JsFuture::from(response.array_buffer()?).await?;
    let body = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(HttpResponse::ok(response.status(), body))
}
