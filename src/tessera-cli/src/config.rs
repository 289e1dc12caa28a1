use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Data, Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Connection settings for the Tessera client
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the server's resource API
    pub api_url: String,
    /// Bearer token attached to authenticated requests
    pub access_token: Option<String>,
    /// Request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("http://localhost:3000"),
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `tessera.toml` and `TESSERA_`-prefixed
    /// environment variables, on top of the defaults
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::figment(Toml::file("tessera.toml")).extract().map_err(Box::new)
    }

    /// Load configuration from an explicit file path
    pub fn load_from_path(path: &Path) -> Result<Self, Box<figment::Error>> {
        Self::figment(Toml::file(path)).extract().map_err(Box::new)
    }

    fn figment(toml: Data<Toml>) -> Figment {
        Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(toml)
            .merge(Env::prefixed("TESSERA_"))
    }
}
