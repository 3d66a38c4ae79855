pub mod app;
pub mod gift_card;
pub mod session;
pub mod signin;
pub mod wallet_api;
pub mod wallet_edit;
pub mod wallet_store;
pub mod wallet_view;
