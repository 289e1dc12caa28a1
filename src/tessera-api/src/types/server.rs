use serde::{Deserialize, Serialize};

/// Aggregate usage counters reported by a server instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMetric {
    pub total_posts: u64,
    pub total_user: u64,
}

/// Federated server instance descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Unique server identifier
    pub id: String,
    /// Human-readable instance name
    pub name: String,
    pub description: Option<String>,
    pub metric: ServerMetric,
    /// Content categories the instance advertises
    #[serde(default)]
    pub categories: Vec<String>,
}
