//! API Client
//!
//! Fetch-backed bindings to the remote todos REST API, organized by domain.

mod todos;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use todos::*;

/// Base URL of the todos REST API
pub const API_BASE_URL: &str = "https://mate.academy/students-api";

/// Demo user owning the todos
pub const USER_ID: u32 = 10875;

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Perform a JSON request and return the parsed response body
async fn request(method: &str, url: &str, body: Option<String>) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json; charset=UTF-8")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)
}
