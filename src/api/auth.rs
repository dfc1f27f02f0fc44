//! Authentication and current-user endpoints.

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{AuthResponse, Credentials, SignUpRequest, User};

impl ApiClient {
    /// Sign in with email and password; stores the returned session.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let request = ApiRequest::post("/auth/sign-in").with_body(credentials)?;
        let auth: AuthResponse = self.request(request).await?;
        self.session().set_session(auth.token.clone(), auth.user.clone());
        Ok(auth)
    }

    /// Register a new account; stores the returned session.
    pub async fn sign_up(&self, registration: &SignUpRequest) -> Result<AuthResponse> {
        let request = ApiRequest::post("/auth/sign-up").with_body(registration)?;
        let auth: AuthResponse = self.request(request).await?;
        self.session().set_session(auth.token.clone(), auth.user.clone());
        Ok(auth)
    }

    /// End the session. The local session is discarded even when the
    /// backend call fails.
    pub async fn logout(&self) -> Result<()> {
        let result = self.request_unit(ApiRequest::post("/auth/logout")).await;
        self.session().clear();
        result
    }

    /// Fetch the signed-in user and refresh the cached identity.
    pub async fn me(&self) -> Result<User> {
        let user: User = self.request(ApiRequest::get("/users/me")).await?;
        self.session().set_user(user.clone());
        Ok(user)
    }
}
