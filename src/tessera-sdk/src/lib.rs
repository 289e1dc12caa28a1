//! Async client for the Tessera platform resource API.
//!
//! One [`TesseraClient`] wraps a single `reqwest::Client` and exposes a
//! method per API operation. The client holds no mutable state after
//! construction; methods borrow `&self` and can be awaited concurrently
//! without ordering guarantees between them.

mod client;
mod error;
mod filter;
mod wallet;

pub use client::TesseraClient;
pub use error::SdkError;
pub use filter::{Filter, Include};

// Re-export API types for convenience
pub use tessera_api as types;
