use dioxus::prelude::*;

use purse_common::currency::format_balance;
use purse_common::store::FetchStatus;

use super::app::Route;
use super::gift_card::GiftCard;
use super::wallet_store::{use_wallet_action, use_wallet_store, WalletAction};

#[component]
pub fn WalletView() -> Element {
    let store = use_wallet_store();
    let wallet_action = use_wallet_action();
    let nav = use_navigator();

    // Fetch on first mount
    use_hook(move || {
        wallet_action.send(WalletAction::Refresh);
    });

    let state = store.read();
    let status = state.status;
    let error = state.error.clone().unwrap_or_default();
    let wallet = state.wallet.clone();
    let refreshed_str = state
        .refreshed_at
        .map(|ts| ts.format("%H:%M:%S").to_string());
    drop(state);

    let body = match (status, wallet) {
        (FetchStatus::Idle, _) | (FetchStatus::Loading, _) => rsx! {
            p { class: "loading", "Loading..." }
        },
        (FetchStatus::Failed, _) => rsx! {
            div { class: "wallet-error",
                p { "Error: {error}" }
                button {
                    onclick: move |_| wallet_action.send(WalletAction::Refresh),
                    "Try Again"
                }
            }
        },
        (FetchStatus::Ready, Some(wallet)) => {
            let credit_str = format_balance(wallet.credit);
            let giftcard_str = format_balance(wallet.giftcard);
            let wallet_id = wallet.id;
            rsx! {
                div { class: "wallet-card",
                    p { strong { "Name: " } "{wallet.name}" }
                    p { strong { "Credit: " } "{credit_str}" }
                    p { strong { "Gift Card: " } "{giftcard_str}" }
                    if let Some(ts) = refreshed_str {
                        p { class: "refreshed-at", "Refreshed {ts} UTC" }
                    }
                }
                div { class: "wallet-actions",
                    button {
                        onclick: move |_| { nav.push(Route::Edit { id: wallet_id }); },
                        "Update Wallet"
                    }
                }
                GiftCard { balance: wallet.giftcard }
            }
        }
        // Ready implies a wallet is held; render nothing if it somehow isn't
        (FetchStatus::Ready, None) => rsx! {},
    };

    rsx! {
        div { class: "wallet-view",
            h2 { "Wallet" }
            {body}
        }
    }
}
