use serde_json::json;
use tessera_api::{
    ConnectNetworkRequest, Network, ResultList, Server, User, UserNonce, UserWallet, Wallet,
};

use crate::filter::{Filter, Include};
use crate::{SdkError, TesseraClient};

/// Error class the server reports for a duplicate wallet address
const UNPROCESSABLE_ENTITY_ERROR: &str = "UnprocessableEntityError";

impl TesseraClient {
    // ── Nonce operations ───────────────────────────────────────────

    /// Fetch the signing nonce for a wallet
    ///
    /// The server answers with an empty body when no nonce has been issued
    /// yet; that decodes to a nonce of 0.
    pub async fn wallet_nonce(&self, wallet_id: &str) -> Result<UserNonce, SdkError> {
        self.get_or_default(&format!("wallets/{wallet_id}/nonce"))
            .await
    }

    /// Fetch the signing nonce for a user, with the same empty-body default
    pub async fn user_nonce(&self, user_id: &str) -> Result<UserNonce, SdkError> {
        self.get_or_default(&format!("users/{user_id}/nonce")).await
    }

    // ── Wallet operations ──────────────────────────────────────────

    /// Look up the user owning a wallet address, with imported identities
    /// and the primary wallet expanded
    pub async fn user_by_wallet_address(&self, address: &str) -> Result<User, SdkError> {
        let filter = Filter::new()
            .include(Include::relation("people"))
            .include(Include::relation("wallets").where_clause(json!({"primary": true})));
        self.get_filtered(&format!("wallets/{address}/user"), &filter)
            .await
    }

    /// Fetch the wallet of the authenticated caller
    pub async fn current_wallet(&self) -> Result<UserWallet, SdkError> {
        self.get("wallet").await
    }

    /// Fetch all wallets bound to a user, with the network relation expanded
    pub async fn user_wallets(&self, user_id: &str) -> Result<ResultList<UserWallet>, SdkError> {
        let filter = Filter::new().include(Include::relation("network"));
        self.get_filtered(&format!("users/{user_id}/wallets"), &filter)
            .await
    }

    // ── Network operations ─────────────────────────────────────────

    /// Bind a new wallet/network to a user
    ///
    /// A duplicate address surfaces as [`SdkError::AccountRegistered`];
    /// every other failure is reported as `Ok(None)` rather than raised.
    pub async fn connect_network(
        &self,
        user_id: &str,
        payload: &ConnectNetworkRequest,
    ) -> Result<Option<Wallet>, SdkError> {
        let result = self
            .post(
                &format!("users/{user_id}/wallets"),
                &[("blockchain", "true")],
                payload,
            )
            .await;
        match result {
            Ok(wallet) => Ok(Some(wallet)),
            Err(err) if is_already_registered(&err) => Err(SdkError::AccountRegistered),
            Err(err) => {
                tracing::warn!(error = %err, user_id, "connect network failed");
                Ok(None)
            }
        }
    }

    /// Rebind the user's active network
    ///
    /// Same duplicate-address translation as [`Self::connect_network`], but
    /// every other failure is re-raised instead of swallowed.
    pub async fn switch_network(
        &self,
        user_id: &str,
        payload: &ConnectNetworkRequest,
    ) -> Result<(), SdkError> {
        match self
            .patch(&format!("users/{user_id}/networks"), payload)
            .await
        {
            Err(err) if is_already_registered(&err) => Err(SdkError::AccountRegistered),
            other => other,
        }
    }

    /// Fetch all networks, currencies expanded in ascending priority order
    pub async fn networks(&self) -> Result<ResultList<Network>, SdkError> {
        let filter = Filter::new().include(Include::relation("currencies").order("priority ASC"));
        self.get_filtered("networks", &filter).await
    }

    // ── Server operations ──────────────────────────────────────────

    /// Fetch the descriptor of the server instance the client points at
    pub async fn server(&self) -> Result<Server, SdkError> {
        self.get("server").await
    }

    /// Identifier of the server instance, discarding the rest of the
    /// descriptor
    pub async fn server_id(&self) -> Result<String, SdkError> {
        Ok(self.server().await?.id)
    }
}

fn is_already_registered(err: &SdkError) -> bool {
    matches!(err, SdkError::Api { name: Some(name), .. } if name == UNPROCESSABLE_ENTITY_ERROR)
}
