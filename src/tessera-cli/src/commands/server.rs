use clap::Subcommand;
use tessera_sdk::TesseraClient;

#[derive(Subcommand)]
pub enum ServerAction {
    /// Show the full server descriptor
    Info,
    /// Print only the server identifier
    Id,
}

impl ServerAction {
    pub async fn run(self, client: &TesseraClient) -> anyhow::Result<()> {
        match self {
            ServerAction::Info => {
                let resp = client.server().await?;
                println!("{}", serde_json::to_string_pretty(&resp)?);
            }
            ServerAction::Id => {
                let id = client.server_id().await?;
                println!("{id}");
            }
        }
        Ok(())
    }
}
