use dioxus::prelude::*;

use super::session;
use super::signin::SignInView;
use super::wallet_edit::WalletEdit;
use super::wallet_store::use_wallet_coroutine;
use super::wallet_view::WalletView;
use purse_common::store::WalletStore;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/wallet/:id/edit")]
    Edit { id: u32 },
    #[end_layout]
    #[route("/signin")]
    SignIn {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(WalletStore::new()));
    use_wallet_coroutine();

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();

    // Redirect to sign-in if no bearer token is stored
    if session::bearer_token().is_none() {
        nav.replace(Route::SignIn {});
        return rsx! {};
    }

    rsx! {
        div { class: "purse-app",
            header { class: "app-header",
                div { class: "header-top",
                    h1 { "Purse" }
                    button {
                        class: "signout-btn",
                        onclick: move |_| {
                            session::clear_bearer_token();
                            nav.replace(Route::SignIn {});
                        },
                        "Sign out"
                    }
                }
                p { "Your credit and gift-card balances" }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: renders the wallet view.
#[component]
fn Home() -> Element {
    rsx! { WalletView {} }
}

/// Route component: renders the edit form for the wallet in the URL.
#[component]
fn Edit(id: u32) -> Element {
    rsx! { WalletEdit { id } }
}

#[component]
fn SignIn() -> Element {
    rsx! { SignInView {} }
}
