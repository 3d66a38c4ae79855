use chrono::{DateTime, Utc};

use crate::error::FetchError;
use crate::wallet::Wallet;

/// Fetch lifecycle phase of the wallet store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Client-side cache of the remote wallet.
///
/// One instance lives for the whole browser session, owned as a context
/// signal at the top of the app. All mutation goes through `begin`/`finish`:
/// `begin` marks a request in flight, `finish` applies its outcome. A failed
/// request leaves any previously held wallet untouched (stale but
/// available); a superseded request's outcome is discarded entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletStore {
    pub wallet: Option<Wallet>,
    pub status: FetchStatus,
    pub error: Option<String>,
    /// When the held wallet was last confirmed by the server.
    pub refreshed_at: Option<DateTime<Utc>>,
    /// Identifies the newest in-flight request; results from older
    /// generations are stale and must not overwrite newer ones.
    generation: u64,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started: status goes to Loading and any previous
    /// error is cleared. Returns the generation the caller must hand back
    /// to `finish`.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.error = None;
        self.generation
    }

    /// Apply the outcome of the request started by the matching `begin`.
    pub fn finish(&mut self, generation: u64, outcome: Result<Wallet, FetchError>) {
        if generation != self.generation {
            return;
        }
        match outcome {
            Ok(wallet) => {
                self.wallet = Some(wallet);
                self.status = FetchStatus::Ready;
                self.error = None;
                self.refreshed_at = Some(Utc::now());
            }
            Err(err) => {
                self.status = FetchStatus::Failed;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Generation of the newest request started so far. Callers can compare
    /// snapshots of this to tell whether a request began after theirs.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(name: &str, credit: f64) -> Wallet {
        Wallet {
            id: 1,
            name: name.into(),
            credit,
            giftcard: 5.0,
        }
    }

    #[test]
    fn new_store_is_idle_and_empty() {
        let store = WalletStore::new();
        assert_eq!(store.status, FetchStatus::Idle);
        assert!(store.wallet.is_none());
        assert!(store.error.is_none());
        assert!(store.refreshed_at.is_none());
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut store = WalletStore::new();
        let gen = store.begin();
        store.finish(gen, Err(FetchError::Status(500)));
        assert_eq!(store.status, FetchStatus::Failed);

        store.begin();
        assert_eq!(store.status, FetchStatus::Loading);
        assert!(store.error.is_none());
    }

    #[test]
    fn success_replaces_wallet() {
        let mut store = WalletStore::new();
        let gen = store.begin();
        store.finish(gen, Ok(wallet("A", 10.0)));
        assert_eq!(store.status, FetchStatus::Ready);
        assert_eq!(store.wallet, Some(wallet("A", 10.0)));
        assert!(store.error.is_none());
        assert!(store.refreshed_at.is_some());
    }

    #[test]
    fn missing_token_fails_with_expected_message() {
        let mut store = WalletStore::new();
        let gen = store.begin();
        store.finish(gen, Err(FetchError::MissingToken));
        assert_eq!(store.status, FetchStatus::Failed);
        assert_eq!(store.error.as_deref(), Some("No token found"));
        assert!(store.wallet.is_none());
    }

    #[test]
    fn failure_preserves_prior_wallet() {
        let mut store = WalletStore::new();
        let gen = store.begin();
        store.finish(gen, Ok(wallet("A", 10.0)));

        let gen = store.begin();
        store.finish(gen, Err(FetchError::Status(500)));
        assert_eq!(store.status, FetchStatus::Failed);
        assert_eq!(store.wallet, Some(wallet("A", 10.0)));
        assert!(store.error.is_some());
    }

    #[test]
    fn repeated_refresh_with_stable_response_is_idempotent() {
        let mut store = WalletStore::new();
        for _ in 0..2 {
            let gen = store.begin();
            store.finish(gen, Ok(wallet("A", 10.0)));
        }
        assert_eq!(store.status, FetchStatus::Ready);
        assert_eq!(store.wallet, Some(wallet("A", 10.0)));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut store = WalletStore::new();
        let first = store.begin();
        let second = store.begin();

        // The slow first response arrives after the second request started.
        store.finish(first, Ok(wallet("stale", 1.0)));
        assert_eq!(store.status, FetchStatus::Loading);
        assert!(store.wallet.is_none());

        store.finish(second, Ok(wallet("fresh", 2.0)));
        assert_eq!(store.status, FetchStatus::Ready);
        assert_eq!(store.wallet, Some(wallet("fresh", 2.0)));
    }

    #[test]
    fn stale_failure_cannot_clobber_newer_success() {
        let mut store = WalletStore::new();
        let first = store.begin();
        let second = store.begin();

        store.finish(second, Ok(wallet("fresh", 2.0)));
        store.finish(first, Err(FetchError::Status(502)));

        assert_eq!(store.status, FetchStatus::Ready);
        assert_eq!(store.wallet, Some(wallet("fresh", 2.0)));
        assert!(store.error.is_none());
    }
}
