use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api_client::{ApiClient, MemoryTokenStore, SessionHandle, TokenStore};
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::{json, Value};
use shared_types::ClientConfig;

const TEST_SECRET: &[u8] = b"lawlink-test-secret";

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_multipart(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    }

    /// True when the multipart body has a part with this field name.
    pub fn has_part(&self, name: &str) -> bool {
        self.body_text().contains(&format!("name=\"{name}\""))
    }
}

type Canned = HashMap<(Method, String), (StatusCode, Value)>;

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<Canned>>,
    log: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the marketplace backend.
///
/// Every request is recorded; answers come from routes registered with
/// `respond`. Unknown routes answer 404 with a JSON message.
pub struct MockBackend {
    base_url: String,
    state: MockState,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let router = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock backend stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Register the answer for `method path`. A `Value::Null` body sends no body.
    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: Value) -> &Self {
        self.state
            .responses
            .lock()
            .expect("responses lock")
            .insert((method, path.to_string()), (status, body));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.log.lock().expect("log lock").clone()
    }

    /// The most recent request to `method path`.
    pub fn last(&self, method: Method, path: &str) -> RecordedRequest {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .unwrap_or_else(|| panic!("no {method} {path} was sent"))
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.base_url.clone(),
            ..ClientConfig::default()
        }
    }

    /// A client with nothing persisted, as on a first visit.
    pub fn client(&self) -> (ApiClient, MemoryTokenStore) {
        self.client_with_store(MemoryTokenStore::new())
    }

    /// A client whose store already holds `token`, as after a reload.
    pub fn signed_in_client(&self, token: &str) -> (ApiClient, MemoryTokenStore) {
        self.client_with_store(MemoryTokenStore::with_token(token))
    }

    fn client_with_store(&self, store: MemoryTokenStore) -> (ApiClient, MemoryTokenStore) {
        let shared: Arc<dyn TokenStore> = Arc::new(store.clone());
        let client = ApiClient::new(self.config(), SessionHandle::restore(shared));
        (client, store)
    }
}

async fn record(State(state): State<MockState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.map(|b| b.to_vec()).unwrap_or_default();
    let header_value = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let path = parts.uri.path().to_string();

    state.log.lock().expect("log lock").push(RecordedRequest {
        method: parts.method.clone(),
        path: path.clone(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: bytes,
    });

    let canned = state
        .responses
        .lock()
        .expect("responses lock")
        .get(&(parts.method, path))
        .cloned();
    match canned {
        Some((status, Value::Null)) => status.into_response(),
        Some((status, body)) => (status, Json(body)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Route not found" }))).into_response(),
    }
}

#[derive(Serialize)]
struct TestClaims<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    role: &'a str,
    iat: i64,
    exp: i64,
}

/// Sign a token the way the backend issues them.
pub fn mint_token(id: &str, name: &str, role: &str) -> String {
    let now = Utc::now();
    let claims = TestClaims {
        id,
        name,
        email: "user@lawlink.test",
        role,
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET))
        .expect("Failed to create test JWT")
}

pub fn bearer(token: &str) -> Option<String> {
    Some(format!("Bearer {token}"))
}
