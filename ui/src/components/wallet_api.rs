//! Browser HTTP client for the remote wallet API.
//!
//! Every request carries the bearer token from local storage. The base URL
//! is fixed at compile time via `PURSE_API_URL`; when unset, requests are
//! same-origin relative.

use purse_common::error::FetchError;
use purse_common::wallet::Wallet;

use super::session;

/// The single wallet exposed by this deployment.
pub const WALLET_ID: u32 = 1;

fn api_base_url() -> &'static str {
    option_env!("PURSE_API_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or("")
        .trim_end_matches('/')
}

fn wallet_url() -> String {
    format!("{}/api/wallets/{}", api_base_url(), WALLET_ID)
}

/// GET the wallet. Fails with `MissingToken` before any network call when
/// no credential is stored.
pub async fn fetch_wallet() -> Result<Wallet, FetchError> {
    let token = session::bearer_token().ok_or(FetchError::MissingToken)?;
    let body = fetch_json(&wallet_url(), "GET", None, &token).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// PUT the full edited wallet; returns the server's copy.
pub async fn put_wallet(wallet: &Wallet) -> Result<Wallet, FetchError> {
    let token = session::bearer_token().ok_or(FetchError::MissingToken)?;
    let body =
        serde_json::to_string(wallet).map_err(|e| FetchError::Malformed(e.to_string()))?;
    let resp = fetch_json(&wallet_url(), "PUT", Some(body), &token).await?;
    serde_json::from_str(&resp).map_err(|e| FetchError::Malformed(e.to_string()))
}

#[cfg(target_family = "wasm")]
async fn fetch_json(
    url: &str,
    method: &str,
    body: Option<String>,
    token: &str,
) -> Result<String, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);

    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Network(format!("Failed to create request: {e:?}")))?;

    let headers = request.headers();
    headers
        .set("Authorization", &format!("Bearer {token}"))
        .map_err(|e| FetchError::Network(format!("Failed to set header: {e:?}")))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| FetchError::Network(format!("Failed to set header: {e:?}")))?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network("No window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(format!("Fetch failed: {e:?}")))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("Response is not a Response object".into()))?;

    if resp.status() != 200 {
        return Err(FetchError::Status(resp.status()));
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| FetchError::Network(format!("Failed to get text: {e:?}")))?,
    )
    .await
    .map_err(|e| FetchError::Network(format!("Failed to read body: {e:?}")))?;

    text.as_string()
        .ok_or_else(|| FetchError::Malformed("Response body is not a string".into()))
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn fetch_json(
    _url: &str,
    _method: &str,
    _body: Option<String>,
    _token: &str,
) -> Result<String, FetchError> {
    Err(FetchError::Network(
        "Wallet API only available in the browser".to_string(),
    ))
}
