use serde::{Deserialize, Serialize};

/// Blockchain network descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network identifier (e.g. `ethereum`, `polkadot`)
    pub id: String,
    /// Chain identifier within the network family, when applicable
    pub chain_id: Option<String>,
    /// Network logo URL
    pub image: Option<String>,
    /// RPC endpoint the front-end signs against
    #[serde(rename = "rpcURL")]
    pub rpc_url: Option<String>,
    /// Block explorer base URL
    #[serde(rename = "explorerURL")]
    pub explorer_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Currencies usable on this network; populated when the `currencies`
    /// relation is expanded, ordered by ascending priority
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

/// Currency available on a network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Number of decimal places
    pub decimal: u8,
    pub image: Option<String>,
    /// Whether this is the network's native currency
    #[serde(default)]
    pub native: bool,
    pub network_id: Option<String>,
    /// Display ordering, lower sorts first
    #[serde(default)]
    pub priority: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_without_currencies() {
        let json = r#"{"id": "ethereum", "rpcURL": "https://rpc.example"}"#;
        let network: Network = serde_json::from_str(json).unwrap();
        assert_eq!(network.id, "ethereum");
        assert_eq!(network.rpc_url.as_deref(), Some("https://rpc.example"));
        assert!(network.currencies.is_empty());
    }

    #[test]
    fn test_network_with_ordered_currencies() {
        let json = r#"{
            "id": "polkadot",
            "currencies": [
                {"id": "c-1", "name": "Polkadot", "symbol": "DOT", "decimal": 10, "native": true, "priority": 1},
                {"id": "c-2", "name": "AUSD", "symbol": "aUSD", "decimal": 12, "priority": 2}
            ]
        }"#;
        let network: Network = serde_json::from_str(json).unwrap();
        assert_eq!(network.currencies.len(), 2);
        assert!(network.currencies[0].native);
        assert!(network.currencies[0].priority < network.currencies[1].priority);
    }

    #[test]
    fn test_currency_serde_roundtrip() {
        let currency = Currency {
            id: "c-1".to_string(),
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimal: 18,
            image: None,
            native: true,
            network_id: Some("ethereum".to_string()),
            priority: 1,
        };
        let json = serde_json::to_string(&currency).unwrap();
        assert!(json.contains("\"networkId\":\"ethereum\""));
        let deserialized: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.symbol, "ETH");
        assert_eq!(deserialized.decimal, 18);
    }
}
