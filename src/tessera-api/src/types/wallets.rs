use serde::{Deserialize, Serialize};

use super::networks::Network;
use super::users::User;

/// Blockchain address bound to a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Public address, also the record identifier
    pub id: String,
    /// Chain family the address belongs to (e.g. `substrate`, `near`)
    pub blockchain_platform: Option<String>,
    /// Network the wallet is currently bound to
    pub network_id: Option<String>,
    /// Whether this is the user's default address
    #[serde(default)]
    pub primary: bool,
    pub user_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Wallet with its relations optionally expanded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWallet {
    /// Public address, also the record identifier
    pub id: String,
    pub blockchain_platform: Option<String>,
    pub network_id: Option<String>,
    #[serde(default)]
    pub primary: bool,
    pub user_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Present when the `network` relation is expanded
    pub network: Option<Network>,
    /// Present when the `user` relation is expanded
    pub user: Option<User>,
}

/// One-time value the server hands out for wallet signature verification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserNonce {
    #[serde(default)]
    pub nonce: u64,
}

/// Account reference carried alongside a connect-network request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedAccount {
    pub id: String,
}

/// Request body for binding a wallet/network to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectNetworkRequest {
    /// Public address being connected
    pub public_address: String,
    /// Nonce previously fetched for this wallet or user
    pub nonce: u64,
    /// Signature over the nonce; explicit `null` when signing is deferred
    pub signature: Option<String>,
    /// Target network identifier (e.g. `ethereum`)
    pub network_type: String,
    /// Wallet software family (e.g. `metamask`)
    pub wallet_type: String,
    /// Existing account to link, omitted entirely when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LinkedAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_primary_defaults_to_false() {
        let json = r#"{"id": "0xabc", "networkId": "ethereum"}"#;
        let wallet: Wallet = serde_json::from_str(json).unwrap();
        assert!(!wallet.primary);
        assert_eq!(wallet.network_id.as_deref(), Some("ethereum"));
    }

    #[test]
    fn test_user_wallet_with_network_relation() {
        let json = r#"{
            "id": "0xabc",
            "networkId": "ethereum",
            "primary": true,
            "network": {"id": "ethereum", "rpcURL": "https://rpc.example"}
        }"#;
        let wallet: UserWallet = serde_json::from_str(json).unwrap();
        let network = wallet.network.unwrap();
        assert_eq!(network.id, "ethereum");
        assert!(network.currencies.is_empty());
    }

    #[test]
    fn test_nonce_defaults_to_zero_for_empty_object() {
        let nonce: UserNonce = serde_json::from_str("{}").unwrap();
        assert_eq!(nonce.nonce, 0);
    }

    #[test]
    fn test_connect_request_omits_absent_linked_account() {
        let req = ConnectNetworkRequest {
            public_address: "0xabc".to_string(),
            nonce: 42,
            signature: None,
            network_type: "ethereum".to_string(),
            wallet_type: "metamask".to_string(),
            data: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["publicAddress"], "0xabc");
        assert_eq!(value["nonce"], 42);
        // signature travels as an explicit null, data is dropped
        assert!(value["signature"].is_null());
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_connect_request_carries_linked_account() {
        let req = ConnectNetworkRequest {
            public_address: "0xabc".to_string(),
            nonce: 7,
            signature: Some("0xsig".to_string()),
            network_type: "polkadot".to_string(),
            wallet_type: "polkadot-js".to_string(),
            data: Some(LinkedAccount {
                id: "u-1".to_string(),
            }),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["data"]["id"], "u-1");
        assert_eq!(value["walletType"], "polkadot-js");
    }
}
