use serde::{Deserialize, Serialize};

/// The wallet record tracked by the app, in the remote API's JSON shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: u32,
    pub name: String,
    pub credit: f64,
    pub giftcard: f64,
}

/// Partial wallet used as edit input. Unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletPatch {
    pub name: Option<String>,
    pub credit: Option<f64>,
    pub giftcard: Option<f64>,
}

impl Wallet {
    /// Merge a patch over this wallet, producing the entity to persist.
    pub fn merged(&self, patch: &WalletPatch) -> Wallet {
        Wallet {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            credit: patch.credit.unwrap_or(self.credit),
            giftcard: patch.giftcard.unwrap_or(self.giftcard),
        }
    }
}

impl WalletPatch {
    /// True when no field is set, i.e. applying it would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.credit.is_none() && self.giftcard.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Wallet {
        Wallet {
            id: 1,
            name: "A".into(),
            credit: 10.0,
            giftcard: 5.0,
        }
    }

    #[test]
    fn parses_api_body() {
        let wallet: Wallet =
            serde_json::from_str(r#"{"id":1,"name":"A","credit":10,"giftcard":5}"#).unwrap();
        assert_eq!(wallet, sample());
    }

    #[test]
    fn serializes_api_body() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Wallet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn merged_replaces_set_fields() {
        let patch = WalletPatch {
            name: Some("B".into()),
            credit: Some(25.5),
            giftcard: None,
        };
        let merged = sample().merged(&patch);
        assert_eq!(merged.name, "B");
        assert_eq!(merged.credit, 25.5);
        assert_eq!(merged.giftcard, 5.0);
        assert_eq!(merged.id, 1);
    }

    #[test]
    fn merged_with_empty_patch_is_identity() {
        let patch = WalletPatch::default();
        assert!(patch.is_empty());
        assert_eq!(sample().merged(&patch), sample());
    }
}
