//! Wire types for the Tessera platform resource API.
//!
//! Everything here is a plain serde record mirroring the JSON the server
//! sends and accepts. The server is the source of truth for shape and
//! validity; fields it may omit are `Option` and nothing is validated
//! locally.

mod types;

pub use types::error::{ApiErrorBody, ApiErrorDetail};
pub use types::lists::{ListMeta, ResultList};
pub use types::networks::{Currency, Network};
pub use types::server::{Server, ServerMetric};
pub use types::users::{People, SocialPlatform, User};
pub use types::wallets::{ConnectNetworkRequest, LinkedAccount, UserNonce, UserWallet, Wallet};
