use reqwest::Method;
use shared_types::{AppError, AuthResponse, Credentials, RegistrationRequest};

use crate::request::{ApiClient, Auth};
use crate::session::Session;

/// What a registration answer leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// The backend issued a token straight away.
    SignedIn(Session),
    /// Account created without a token; the user signs in next.
    Created { message: String },
}

impl ApiClient {
    /// `POST /api/auth/login`. On success the session is written and returned.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        credentials.check()?;
        let response: AuthResponse = self
            .send_json(Method::POST, "/api/auth/login", credentials, Auth::Public)
            .await?;
        match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Ok(self.session().establish(&token)),
            None => Err(AppError::decode(
                response
                    .message
                    .unwrap_or_else(|| "Login succeeded but no token was issued.".into()),
            )),
        }
    }

    /// `POST /api/auth/register`, multipart only when a license file is attached.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<RegisterOutcome, AppError> {
        request.check()?;
        let body = request.payload();
        tracing::debug!(
            role = request.role.as_str(),
            multipart = body.is_multipart(),
            "submitting registration"
        );
        let response: Option<AuthResponse> = self
            .send_body(Method::POST, "/api/auth/register", body, Auth::Public)
            .await?;
        let response = response.unwrap_or_default();

        match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Ok(RegisterOutcome::SignedIn(self.session().establish(&token))),
            None => Ok(RegisterOutcome::Created {
                message: response
                    .message
                    .unwrap_or_else(|| "Registration successful. Please sign in.".into()),
            }),
        }
    }

    /// Forget the session locally. The backend keeps no session to revoke.
    pub fn logout(&self) {
        self.session().clear();
        tracing::debug!("signed out");
    }
}
