use clap::Subcommand;
use tessera_sdk::TesseraClient;

#[derive(Subcommand)]
pub enum UserAction {
    /// Fetch the signing nonce for a user
    Nonce {
        /// User ID
        id: String,
    },
}

impl UserAction {
    pub async fn run(self, client: &TesseraClient) -> anyhow::Result<()> {
        match self {
            UserAction::Nonce { id } => {
                let resp = client.user_nonce(&id).await?;
                println!("{}", serde_json::to_string_pretty(&resp)?);
            }
        }
        Ok(())
    }
}
