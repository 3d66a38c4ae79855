use std::fmt;

/// Why a wallet request failed.
///
/// Every cause surfaces to the store as a Failed status carrying this
/// error's display string; the views never see anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// No bearer token in local storage; the request was never sent.
    MissingToken,
    /// The browser fetch itself failed (offline, DNS, CORS).
    Network(String),
    /// The server answered with a non-200 status.
    Status(u16),
    /// The response body did not parse as a wallet.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "No token found"),
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::Status(code) => write!(f, "Wallet request failed with status {code}"),
            Self::Malformed(msg) => write!(f, "Could not read wallet response: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_message() {
        assert_eq!(FetchError::MissingToken.to_string(), "No token found");
    }

    #[test]
    fn status_message_names_code() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "Wallet request failed with status 500"
        );
    }
}
