/// Errors from the Tessera SDK
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-side error class, when the error envelope carried one
        name: Option<String>,
        /// Error message from the API
        message: String,
    },
    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    /// The wallet address is already registered to an account
    #[error("account already registered")]
    AccountRegistered,
}

impl SdkError {
    /// True for the distinguished duplicate-address domain error
    pub fn is_account_registered(&self) -> bool {
        matches!(self, SdkError::AccountRegistered)
    }
}
