use clap::{Args, Subcommand};
use tessera_sdk::TesseraClient;
use tessera_sdk::types::{ConnectNetworkRequest, LinkedAccount};

#[derive(Subcommand)]
pub enum NetworkAction {
    /// List all networks with their currencies
    List,
    /// Connect a new wallet/network to a user
    Connect(ConnectArgs),
    /// Switch the user's active network
    Switch(ConnectArgs),
}

/// Wallet-binding parameters shared by connect and switch
#[derive(Args)]
pub struct ConnectArgs {
    /// User ID
    user_id: String,

    /// Public address being connected
    #[arg(long)]
    address: String,

    /// Nonce previously fetched for the wallet or user
    #[arg(long)]
    nonce: u64,

    /// Signature over the nonce
    #[arg(long)]
    signature: Option<String>,

    /// Target network identifier (e.g. ethereum)
    #[arg(long)]
    network_type: String,

    /// Wallet software family (e.g. metamask)
    #[arg(long)]
    wallet_type: String,

    /// Existing account ID to link
    #[arg(long)]
    link_account: Option<String>,
}

impl ConnectArgs {
    fn into_parts(self) -> (String, ConnectNetworkRequest) {
        let request = ConnectNetworkRequest {
            public_address: self.address,
            nonce: self.nonce,
            signature: self.signature,
            network_type: self.network_type,
            wallet_type: self.wallet_type,
            data: self.link_account.map(|id| LinkedAccount { id }),
        };
        (self.user_id, request)
    }
}

impl NetworkAction {
    pub async fn run(self, client: &TesseraClient) -> anyhow::Result<()> {
        match self {
            NetworkAction::List => {
                let resp = client.networks().await?;
                println!("{}", serde_json::to_string_pretty(&resp)?);
            }
            NetworkAction::Connect(args) => {
                let (user_id, request) = args.into_parts();
                match client.connect_network(&user_id, &request).await? {
                    Some(wallet) => println!("{}", serde_json::to_string_pretty(&wallet)?),
                    None => println!("No wallet connected."),
                }
            }
            NetworkAction::Switch(args) => {
                let (user_id, request) = args.into_parts();
                client.switch_network(&user_id, &request).await?;
                println!("Network switched.");
            }
        }
        Ok(())
    }
}
