use api_client::{ApiClient, Session, SessionHandle};
use dioxus::prelude::*;
use shared_types::{AppError, Identity, Role};

/// Route guard state. Starts `Loading` and is resolved once from the stored
/// token; afterwards only login, logout or a rejected token move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    pub fn resolve(token_present: bool) -> Self {
        if token_present {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }
}

/// UI mirror of the session held by the api client.
///
/// The `SessionHandle` inside `ApiClient` stays the single writer of the
/// persisted token; these signals only drive re-rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    pub guard: Signal<GuardState>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            guard: Signal::new(GuardState::Loading),
        }
    }

    /// Resolve the guard from whatever the session handle restored.
    pub fn resolve_from(&mut self, handle: &SessionHandle) {
        let current = handle.current();
        self.guard.set(GuardState::resolve(current.is_some()));
        self.session.set(current);
    }

    pub fn is_authenticated(&self) -> bool {
        *self.guard.read() == GuardState::Authenticated
    }

    pub fn signed_in(&mut self, session: Session) {
        self.session.set(Some(session));
        self.guard.set(GuardState::Authenticated);
    }

    pub fn signed_out(&mut self) {
        self.session.set(None);
        self.guard.set(GuardState::Unauthenticated);
    }

    /// Drop the UI session when a request came back 401. The api client has
    /// already cleared storage by then.
    pub fn observe<T>(&mut self, result: &Result<T, AppError>) {
        if let Err(err) = result {
            if err.is_auth_failure() && self.is_authenticated() {
                tracing::warn!("session expired, returning to login");
                self.signed_out();
            }
        }
    }

    pub fn identity(&self) -> Identity {
        self.session
            .read()
            .as_ref()
            .map(|s| s.identity.clone())
            .unwrap_or_default()
    }

    pub fn role(&self) -> Role {
        self.session
            .read()
            .as_ref()
            .map(|s| s.identity.role)
            .unwrap_or_default()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the shared api client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Hook returning true when the signed-in identity is an admin.
pub fn use_is_admin() -> bool {
    use_auth().role() == Role::Admin
}
