//! The one request wrapper every backend call goes through.
//!
//! It attaches the bearer token, issues a single attempt (no retry, no
//! timeout beyond the runtime default), and turns every outcome into
//! `Result<T, AppError>`. A 401 on an authenticated call clears the session.

use std::sync::Arc;

use reqwest::{multipart, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{AppError, ClientConfig, MultipartPart, RequestBody};

use crate::session::SessionHandle;

/// Whether a call must carry the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Bearer,
}

/// Lists come back either bare or wrapped in an object keyed by resource.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(
            alias = "users",
            alias = "lawyers",
            alias = "cases",
            alias = "notifications",
            alias = "appointments",
            alias = "bids",
            alias = "items"
        )]
        data: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) | ListEnvelope::Wrapped { data: items } => items,
        }
    }
}

/// HTTP client bound to the backend and the shared session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionHandle) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
            session,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn builder(&self, method: Method, path: &str, auth: Auth) -> Result<RequestBuilder, AppError> {
        let url = self.config.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match auth {
            Auth::Public => Ok(builder),
            Auth::Bearer => match self.session.token() {
                Some(token) => Ok(builder.bearer_auth(token)),
                None => Err(AppError::unauthorized("Please sign in to continue.")),
            },
        }
    }

    /// Send and classify. Success bodies are parsed as `T`; an empty body is
    /// parsed as JSON `null`.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder, auth: Auth) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request did not reach the server");
            AppError::network("Unable to reach the server. Check your connection and try again.")
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Connection dropped while reading the response: {e}")))?;

        if !(200..300).contains(&status) {
            let err = AppError::from_status(status, &body);
            if err.is_auth_failure() && auth == Auth::Bearer {
                tracing::warn!(status, "session rejected by server, signing out");
                self.session.clear();
            }
            return Err(err);
        }

        let text = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, "unexpected response body");
            AppError::decode("The server sent a response we could not read.")
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let builder = self.builder(Method::GET, path, Auth::Bearer)?;
        self.execute(builder, Auth::Bearer).await
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let envelope: ListEnvelope<T> = self.get(path).await?;
        Ok(envelope.into_vec())
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B, auth: Auth) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.builder(method, path, auth)?.json(body);
        self.execute(builder, auth).await
    }

    /// Send a body that is JSON or multipart depending on whether a file is attached.
    pub(crate) async fn send_body<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        auth: Auth,
    ) -> Result<T, AppError> {
        let builder = self.builder(method, path, auth)?;
        let builder = match body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };
        self.execute(builder, auth).await
    }

    /// Bodyless authenticated call whose answer is ignored.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<(), AppError> {
        let builder = self.builder(method, path, Auth::Bearer)?;
        let _: serde::de::IgnoredAny = self.execute(builder, Auth::Bearer).await?;
        Ok(())
    }
}

fn multipart_form(parts: Vec<MultipartPart>) -> Result<multipart::Form, AppError> {
    let mut form = multipart::Form::new();
    for part in parts {
        form = match part {
            MultipartPart::Text { name, value } => form.text(name, value),
            MultipartPart::File { name, file } => {
                let part = multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(|_| AppError::field(&name, "Unsupported file type"))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.api_base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config) && self.session == other.session
    }
}
