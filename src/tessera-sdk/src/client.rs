use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tessera_api::ApiErrorBody;

use crate::SdkError;
use crate::filter::Filter;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Tessera resource API
///
/// Read-only after construction; one instance is shared across all calls.
pub struct TesseraClient {
    base_url: String,
    access_token: Option<String>,
    http: reqwest::Client,
}

impl TesseraClient {
    /// Create an unauthenticated client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::from_parts(base_url, None, DEFAULT_TIMEOUT)
    }

    /// Create a client that authenticates with a bearer access token
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn with_token(base_url: &str, access_token: &str) -> Result<Self, SdkError> {
        Self::from_parts(base_url, Some(access_token.to_string()), DEFAULT_TIMEOUT)
    }

    /// Create a client with explicit token and request timeout
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn from_parts(
        base_url: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SdkError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(method = %method, %url, "sending API request");
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a GET request and deserialize the response
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        let resp = self.request(Method::GET, path).send().await?;
        handle_response(resp).await
    }

    /// Send a GET request carrying a `filter` query parameter
    pub(crate) async fn get_filtered<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: &Filter,
    ) -> Result<T, SdkError> {
        let resp = self
            .request(Method::GET, path)
            .query(&[("filter", filter.to_query()?)])
            .send()
            .await?;
        handle_response(resp).await
    }

    /// Send a GET request, falling back to `T::default()` on an empty body
    ///
    /// The nonce endpoints answer with no body at all when nothing has been
    /// issued yet.
    pub(crate) async fn get_or_default<T>(&self, path: &str) -> Result<T, SdkError>
    where
        T: DeserializeOwned + Default,
    {
        let resp = self.request(Method::GET, path).send().await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let body = resp.text().await?;
        if body.trim().is_empty() {
            Ok(T::default())
        } else {
            Ok(serde_json::from_str(&body)?)
        }
    }

    /// Send a POST request with a JSON body and deserialize the response
    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T, SdkError> {
        let resp = self
            .request(Method::POST, path)
            .query(query)
            .json(body)
            .send()
            .await?;
        handle_response(resp).await
    }

    /// Send a PATCH request with a JSON body, discarding any response body
    pub(crate) async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<(), SdkError> {
        let resp = self.request(Method::PATCH, path).json(body).send().await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(resp).await)
        }
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SdkError> {
    if resp.status().is_success() {
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        Err(error_from_response(resp).await)
    }
}

async fn error_from_response(resp: reqwest::Response) -> SdkError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => {
            let message = body.error.message.unwrap_or_else(|| text.clone());
            SdkError::Api {
                status,
                name: body.error.name,
                message,
            }
        }
        Err(_) => SdkError::Api {
            status,
            name: None,
            message: text,
        },
    }
}
