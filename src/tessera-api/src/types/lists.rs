use serde::{Deserialize, Serialize};

/// Pagination block attached to every collection response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total_item_count: u64,
    pub total_page_count: u64,
    pub items_per_page: u64,
    pub current_page: Option<u64>,
    pub next_page: Option<u64>,
}

/// Envelope the API wraps collection responses in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultList<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}
