//! Bearer token storage for the browser session.
//!
//! The token is an opaque credential issued elsewhere; this module only
//! reads and writes it under a fixed local-storage key. Absence is a
//! handled condition, never a crash.

/// Local-storage key holding the bearer token.
const TOKEN_KEY: &str = "token";

#[cfg(target_family = "wasm")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the stored bearer token. Absent or blank means signed out.
#[cfg(target_family = "wasm")]
pub fn bearer_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

/// Store the bearer token for subsequent API calls.
#[cfg(target_family = "wasm")]
pub fn store_bearer_token(token: &str) {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(TOKEN_KEY, token) {
                tracing::error!("Failed to store token: {e:?}");
            }
        }
        None => tracing::error!("localStorage unavailable, token not stored"),
    }
}

/// Forget the stored bearer token.
#[cfg(target_family = "wasm")]
pub fn clear_bearer_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
pub fn bearer_token() -> Option<String> {
    None
}

#[cfg(not(target_family = "wasm"))]
pub fn store_bearer_token(_token: &str) {}

#[cfg(not(target_family = "wasm"))]
pub fn clear_bearer_token() {}
