use dioxus::prelude::*;

use purse_common::currency::format_balance;

/// Promotional gift-card panel shown under the wallet balances.
#[component]
pub fn GiftCard(balance: f64) -> Element {
    let balance_str = format_balance(balance);

    rsx! {
        div { class: "gift-card",
            h3 { "Gift Card" }
            p { class: "gift-card-balance", "{balance_str} available" }
            p { "Give the gift of choice with our gift cards!" }
            button { class: "gift-card-buy", "Buy Gift Card" }
        }
    }
}
