//! HTTP client with transparent session refresh.
//!
//! Every request picks up the current bearer token at send time. A 401 on a
//! regular endpoint triggers at most one coalesced refresh cycle and at most
//! one retry of the original request; a 401 on the credential endpoints is a
//! terminal answer and propagates untouched. All failures leave this module
//! as a classified [`ApiError`].

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::refresh::{await_outcome, RefreshGate, RefreshOutcome, RefreshTicket};
use crate::auth::session::SessionStore;
use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorCode, Result};
use crate::types::AuthResponse;

/// Endpoints where a 401 is an expected terminal outcome, not an
/// expired-session signal. Refreshing here would loop on the refresh
/// endpoint itself or mask bad credentials.
const NO_REFRESH_ENDPOINTS: &[&str] = &["/auth/sign-in", "/auth/sign-up", "/auth/refresh"];

const REFRESH_PATH: &str = "/auth/refresh";

fn is_refresh_exempt(path: &str) -> bool {
    NO_REFRESH_ENDPOINTS.contains(&path)
}

/// Descriptor for one API request: method, path, optional JSON body, query.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: &impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|error| {
            ApiError::new(
                ErrorCode::InternalServerError,
                format!("failed to encode request body: {error}"),
                0,
            )
        })?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Authenticated client for the Trade Tracker API.
///
/// # Example
/// ```no_run
/// use tradetracker_client::client::ApiClient;
/// use tradetracker_client::config::ClientConfig;
/// use tradetracker_client::types::Credentials;
///
/// # async fn example() -> tradetracker_client::error::Result<()> {
/// let client = ApiClient::new(ClientConfig::new("https://api.tradetracker.example"))?;
/// client
///     .sign_in(&Credentials {
///         email: "trader@example.com".to_string(),
///         password: "hunter2".to_string(),
///     })
///     .await?;
/// let products = client.list_products().await?;
/// println!("{} products", products.len());
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionStore,
    gate: RefreshGate,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|error| {
                ApiError::new(
                    ErrorCode::InternalServerError,
                    format!("failed to build HTTP client: {error}"),
                    0,
                )
            })?;
        Ok(Self {
            http,
            config,
            session: SessionStore::new(),
            gate: RefreshGate::new(),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a request and decode its JSON success body.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.send_with_refresh(&request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status.as_u16(), response).await);
        }
        let bytes = response.bytes().await.map_err(|error| self.classify(&error))?;
        serde_json::from_slice(&bytes).map_err(|error| {
            ApiError::new(
                ErrorCode::InternalServerError,
                "the server returned an unreadable response",
                status.as_u16(),
            )
            .with_context(serde_json::json!({ "decode": error.to_string() }))
        })
    }

    /// Issue a request whose success body is empty or irrelevant.
    pub async fn request_unit(&self, request: ApiRequest) -> Result<()> {
        let response = self.send_with_refresh(&request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status.as_u16(), response).await);
        }
        Ok(())
    }

    /// Send a request, recovering from an expired session where allowed.
    async fn send_with_refresh(&self, request: &ApiRequest) -> Result<reqwest::Response> {
        let token = self.session.token();
        let response = self
            .dispatch(request, token.as_deref())
            .await
            .map_err(|error| self.classify(&error))?;

        if response.status() != StatusCode::UNAUTHORIZED || is_refresh_exempt(&request.path) {
            return Ok(response);
        }

        debug!(path = %request.path, "401 received, joining refresh cycle");
        match self.refresh_session().await {
            Some(new_token) => {
                // Single retry with the fresh token; a second 401 propagates
                // like any other status.
                self.dispatch(request, Some(&new_token))
                    .await
                    .map_err(|error| self.classify(&error))
            }
            // Refresh failed: the original 401 is the caller's answer.
            None => Ok(response),
        }
    }

    /// Run or join the single-flight refresh cycle.
    ///
    /// The leader performs the one `POST /auth/refresh` call; followers await
    /// its outcome. On failure the leader clears the session and fires the
    /// forced-logout hook before settling.
    async fn refresh_session(&self) -> RefreshOutcome {
        match self.gate.join() {
            RefreshTicket::Follower(receiver) => await_outcome(receiver).await,
            RefreshTicket::Leader => {
                let outcome = self.run_refresh().await;
                if outcome.is_none() {
                    warn!("session refresh failed, forcing logout");
                    self.session.clear();
                    if let Some(hook) = &self.config.on_forced_logout {
                        hook();
                    }
                }
                self.gate.settle(outcome.clone());
                outcome
            }
        }
    }

    async fn run_refresh(&self) -> RefreshOutcome {
        let token = self.session.token();
        let request = ApiRequest::post(REFRESH_PATH);
        let response = match self.dispatch(&request, token.as_deref()).await {
            Ok(response) => response,
            Err(error) => {
                warn!(error = %error, "refresh call failed");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!(status = %response.status(), "refresh rejected by the server");
            return None;
        }
        match response.json::<AuthResponse>().await {
            Ok(auth) => {
                self.session.set_session(auth.token.clone(), auth.user);
                debug!("session token refreshed");
                Some(auth.token)
            }
            Err(error) => {
                warn!(error = %error, "refresh response was malformed");
                None
            }
        }
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.config.base_url(), request.path);
        let mut builder = self.http.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder.send().await
    }

    /// Classify a transport failure using the configured probes.
    fn classify(&self, error: &reqwest::Error) -> ApiError {
        let offline = (self.config.offline_probe)();
        let timed_out = (self.config.timeout_matcher)(error);
        ApiError::no_response(offline, timed_out, &error.to_string())
    }

    async fn error_from_response(status_code: u16, response: reqwest::Response) -> ApiError {
        let bytes = response.bytes().await.unwrap_or_default();
        ApiError::from_response(status_code, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_endpoints_are_refresh_exempt() {
        assert!(is_refresh_exempt("/auth/sign-in"));
        assert!(is_refresh_exempt("/auth/sign-up"));
        assert!(is_refresh_exempt("/auth/refresh"));
        assert!(!is_refresh_exempt("/products"));
        assert!(!is_refresh_exempt("/users/me"));
    }

    #[test]
    fn request_builders_set_method_and_path() {
        let request = ApiRequest::get("/products");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path(), "/products");

        let request = ApiRequest::delete("/products/3");
        assert_eq!(request.method, Method::DELETE);
    }

    #[test]
    fn with_body_encodes_to_json() {
        let request = ApiRequest::post("/product-categories")
            .with_body(&serde_json::json!({ "name": "Cameras" }))
            .unwrap();
        assert_eq!(
            request.body,
            Some(serde_json::json!({ "name": "Cameras" }))
        );
    }

    #[test]
    fn with_query_accumulates_pairs() {
        let request = ApiRequest::get("/product-cost")
            .with_query("productId", 7)
            .with_query("limit", 10);
        assert_eq!(
            request.query,
            vec![
                ("productId".to_string(), "7".to_string()),
                ("limit".to_string(), "10".to_string())
            ]
        );
    }
}
