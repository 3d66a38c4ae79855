use dioxus::prelude::*;

use purse_common::store::FetchStatus;
use purse_common::wallet::WalletPatch;

use super::app::Route;
use super::wallet_store::{use_wallet_action, use_wallet_store, WalletAction};

/// Where the edit form is in its save cycle.
///
/// `Saving` only acts on store statuses from requests newer than the
/// generation captured at submit time, so a stale Ready/Failed left over
/// from the initial fetch can't be mistaken for this save's outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
enum SavePhase {
    Editing,
    Saving,
    Saved,
}

#[component]
pub fn WalletEdit(id: u32) -> Element {
    let store = use_wallet_store();
    let wallet_action = use_wallet_action();
    let nav = use_navigator();

    let mut name_input = use_signal(String::new);
    let mut credit_input = use_signal(String::new);
    let mut giftcard_input = use_signal(String::new);
    let mut seeded = use_signal(|| false);
    let mut save_phase = use_signal(|| SavePhase::Editing);
    let mut save_base_gen = use_signal(|| 0u64);

    // Landing here directly without a loaded wallet: fetch it first
    use_hook(move || {
        if store.read().wallet.is_none() {
            wallet_action.send(WalletAction::Refresh);
        }
    });

    // Pre-populate the form once the wallet is available
    use_effect(move || {
        if *seeded.read() {
            return;
        }
        if let Some(wallet) = store.read().wallet.clone() {
            name_input.set(wallet.name);
            credit_input.set(wallet.credit.to_string());
            giftcard_input.set(wallet.giftcard.to_string());
            seeded.set(true);
        }
    });

    // Watch the save request once it's in flight
    use_effect(move || {
        let state = store.read();
        let status = state.status;
        let generation = state.generation();
        drop(state);

        if *save_phase.read() != SavePhase::Saving || generation <= *save_base_gen.read() {
            return;
        }
        match status {
            FetchStatus::Ready => {
                save_phase.set(SavePhase::Saved);
                spawn(async move {
                    #[cfg(target_family = "wasm")]
                    gloo_timers::future::TimeoutFuture::new(1_200).await;
                    nav.push(Route::Home {});
                });
            }
            FetchStatus::Failed => save_phase.set(SavePhase::Editing),
            _ => {}
        }
    });

    let can_submit = use_memo(move || {
        let name_ok = !name_input.read().trim().is_empty();
        let credit_ok = credit_input.read().trim().parse::<f64>().is_ok();
        let giftcard_ok = giftcard_input.read().trim().parse::<f64>().is_ok();
        name_ok && credit_ok && giftcard_ok
    });

    let submit = move |_| {
        let name = name_input.read().trim().to_string();
        let Ok(credit) = credit_input.read().trim().parse::<f64>() else {
            return;
        };
        let Ok(giftcard) = giftcard_input.read().trim().parse::<f64>() else {
            return;
        };
        if name.is_empty() {
            return;
        }

        save_base_gen.set(store.read().generation());
        wallet_action.send(WalletAction::Update(WalletPatch {
            name: Some(name),
            credit: Some(credit),
            giftcard: Some(giftcard),
        }));
        save_phase.set(SavePhase::Saving);
    };

    let state = store.read();
    let status = state.status;
    let error = state.error.clone().unwrap_or_default();
    let have_wallet = state.wallet.is_some();
    drop(state);

    let phase = *save_phase.read();
    let saving = phase == SavePhase::Saving;
    let submit_label = if saving { "Saving..." } else { "Save Changes" };

    // Still waiting for the initial fetch
    if !have_wallet {
        return match status {
            FetchStatus::Failed => rsx! {
                div { class: "wallet-edit",
                    h2 { "Edit Wallet" }
                    div { class: "wallet-error",
                        p { "Error: {error}" }
                        button {
                            onclick: move |_| wallet_action.send(WalletAction::Refresh),
                            "Try Again"
                        }
                    }
                }
            },
            _ => rsx! {
                div { class: "wallet-edit",
                    h2 { "Edit Wallet" }
                    p { class: "loading", "Loading..." }
                }
            },
        };
    }

    rsx! {
        div { class: "wallet-edit",
            h2 { "Edit Wallet" }
            p { class: "edit-sub", "Wallet #{id}" }

            if phase == SavePhase::Saved {
                p { class: "save-confirm", "Wallet updated!" }
            }
            if status == FetchStatus::Failed && phase == SavePhase::Editing {
                p { class: "field-error", "Error: {error}" }
            }

            div { class: "form-group",
                label { "Name" }
                input {
                    r#type: "text",
                    value: "{name_input}",
                    oninput: move |evt| name_input.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Credit" }
                input {
                    r#type: "number",
                    value: "{credit_input}",
                    oninput: move |evt| credit_input.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Gift Card" }
                input {
                    r#type: "number",
                    value: "{giftcard_input}",
                    oninput: move |evt| giftcard_input.set(evt.value()),
                }
            }

            div { class: "edit-actions",
                button {
                    disabled: !can_submit() || saving,
                    onclick: submit,
                    "{submit_label}"
                }
                button {
                    class: "cancel-btn",
                    onclick: move |_| { nav.push(Route::Home {}); },
                    "Cancel"
                }
            }
        }
    }
}
