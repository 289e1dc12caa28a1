use clap::Subcommand;
use tessera_sdk::TesseraClient;

#[derive(Subcommand)]
pub enum WalletAction {
    /// Fetch the signing nonce for a wallet
    Nonce {
        /// Wallet address
        id: String,
    },
    /// Show the authenticated caller's wallet
    Current,
    /// List all wallets bound to a user
    List {
        /// User ID
        user_id: String,
    },
    /// Look up the user owning a wallet address
    User {
        /// Wallet address
        address: String,
    },
}

impl WalletAction {
    pub async fn run(self, client: &TesseraClient) -> anyhow::Result<()> {
        match self {
            WalletAction::Nonce { id } => {
                let resp = client.wallet_nonce(&id).await?;
                println!("{}", serde_json::to_string_pretty(&resp)?);
            }
            WalletAction::Current => {
                let resp = client.current_wallet().await?;
                println!("{}", serde_json::to_string_pretty(&resp)?);
            }
            WalletAction::List { user_id } => {
                let resp = client.user_wallets(&user_id).await?;
                println!("{}", serde_json::to_string_pretty(&resp)?);
            }
            WalletAction::User { address } => {
                let resp = client.user_by_wallet_address(&address).await?;
                println!("{}", serde_json::to_string_pretty(&resp)?);
            }
        }
        Ok(())
    }
}
