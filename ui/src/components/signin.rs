use dioxus::prelude::*;

use super::app::Route;
use super::session;

/// Token entry page shown when no bearer token is stored.
#[component]
pub fn SignInView() -> Element {
    let nav = use_navigator();
    let mut token_input = use_signal(String::new);

    let can_submit = use_memo(move || !token_input.read().trim().is_empty());

    let submit = move |_| {
        let token = token_input.read().trim().to_string();
        if token.is_empty() {
            return;
        }
        session::store_bearer_token(&token);
        tracing::info!("bearer token stored, entering wallet");
        nav.replace(Route::Home {});
    };

    rsx! {
        div { class: "purse-app",
            div { class: "signin",
                h1 { "Purse" }
                p { "Paste your access token to view your wallet." }

                div { class: "form-group",
                    label { "Access token:" }
                    input {
                        r#type: "password",
                        placeholder: "Bearer token...",
                        value: "{token_input}",
                        oninput: move |evt| token_input.set(evt.value()),
                    }
                }

                button {
                    disabled: !can_submit(),
                    onclick: submit,
                    "Open Wallet"
                }
            }
        }
    }
}
