use dioxus::prelude::*;
use futures::StreamExt;

use purse_common::store::WalletStore;
use purse_common::wallet::WalletPatch;

use super::wallet_api;

/// Actions the UI can send to the wallet coroutine.
#[derive(Debug, Clone)]
pub enum WalletAction {
    /// Re-fetch the wallet from the remote API.
    Refresh,
    /// Persist edited fields, then hold the server's copy.
    Update(WalletPatch),
}

/// Get a handle to send actions to the wallet coroutine.
pub fn use_wallet_action() -> Coroutine<WalletAction> {
    use_coroutine_handle::<WalletAction>()
}

/// The session-wide wallet store provided at the top of the app.
pub fn use_wallet_store() -> Signal<WalletStore> {
    use_context::<Signal<WalletStore>>()
}

/// Start the coroutine that executes wallet requests and applies the
/// store's status transitions.
///
/// Components never call the HTTP client directly; they send actions here.
/// Actions are processed in arrival order, and the store additionally
/// fences out results from superseded requests by generation.
pub fn use_wallet_coroutine() {
    use_coroutine(|mut rx: UnboundedReceiver<WalletAction>| async move {
        let mut store = use_wallet_store();
        while let Some(action) = rx.next().await {
            match action {
                WalletAction::Refresh => {
                    tracing::debug!("refreshing wallet");
                    let generation = store.write().begin();
                    let outcome = wallet_api::fetch_wallet().await;
                    if let Err(ref err) = outcome {
                        tracing::warn!("wallet refresh failed: {err}");
                    }
                    store.write().finish(generation, outcome);
                }
                WalletAction::Update(patch) => {
                    let Some(current) = store.read().wallet.clone() else {
                        tracing::warn!("update requested before any wallet was loaded, ignoring");
                        continue;
                    };
                    if patch.is_empty() {
                        tracing::debug!("empty wallet patch, nothing to persist");
                        continue;
                    }
                    let merged = current.merged(&patch);
                    tracing::debug!("saving wallet {}", merged.id);
                    let generation = store.write().begin();
                    let outcome = wallet_api::put_wallet(&merged).await;
                    if let Err(ref err) = outcome {
                        tracing::warn!("wallet update failed: {err}");
                    }
                    store.write().finish(generation, outcome);
                }
            }
        }
    });
}
