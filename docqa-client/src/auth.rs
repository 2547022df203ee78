//! Session boundary to the external identity provider.
//!
//! The provider owns sign-in and token issuance; this module only models the
//! state the client needs: whether session state has finished loading,
//! whether a user is signed in, and a way to fetch the current bearer token.
//! Readiness is a subscribable signal, not a polled flag, so callers can
//! await it (bounded by the client's timeout) instead of spinning.

use async_trait::async_trait;
use secrecy::Secret;
use tokio::sync::watch;

/// Session state as published by the identity provider integration.
#[derive(Clone)]
pub struct SessionState {
    pub signed_in: bool,
    pub token: Option<Secret<String>>,
}

impl SessionState {
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            token: None,
        }
    }

    pub fn signed_in(token: Secret<String>) -> Self {
        Self {
            signed_in: true,
            token: Some(token),
        }
    }
}

/// What the client needs from the identity provider. Passed explicitly into
/// [`ApiClient::new`](crate::ApiClient::new), never looked up ambiently.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Completes once the provider has finished loading session state.
    /// Loading is monotonic: after the first completion this returns
    /// immediately forever.
    async fn loaded(&self);

    /// Whether an authenticated session exists. Meaningful only after
    /// [`loaded`](Self::loaded) has completed.
    fn signed_in(&self) -> bool;

    /// Fetch a bearer token for the current session, if one is available.
    async fn bearer_token(&self) -> Option<Secret<String>>;
}

/// Create a linked controller/provider pair. The host drives the controller
/// as the identity provider initializes and refreshes tokens; the client
/// observes through the [`WatchSession`] half.
pub fn session_channel() -> (SessionController, WatchSession) {
    let (tx, rx) = watch::channel(None);
    (SessionController { tx }, WatchSession { rx })
}

/// Writer half: publishes session state transitions.
pub struct SessionController {
    tx: watch::Sender<Option<SessionState>>,
}

impl SessionController {
    /// Mark loading complete with the given state. Also used to publish a
    /// later sign-in or sign-out.
    pub fn set_loaded(&self, state: SessionState) {
        let _ = self.tx.send(Some(state));
    }

    /// Replace the current token without touching the signed-in flag.
    /// No-op while still loading.
    pub fn set_token(&self, token: Option<Secret<String>>) {
        self.tx.send_modify(|state| {
            if let Some(state) = state {
                state.token = token;
            }
        });
    }
}

/// Reader half, backed by a watch channel.
#[derive(Clone)]
pub struct WatchSession {
    rx: watch::Receiver<Option<SessionState>>,
}

#[async_trait]
impl SessionProvider for WatchSession {
    async fn loaded(&self) {
        let mut rx = self.rx.clone();
        // An error means the controller was dropped before load completed;
        // the session can then never become usable, so park until the
        // caller's readiness timeout fires.
        if rx.wait_for(|state| state.is_some()).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    fn signed_in(&self) -> bool {
        self.rx
            .borrow()
            .as_ref()
            .map(|state| state.signed_in)
            .unwrap_or(false)
    }

    async fn bearer_token(&self) -> Option<Secret<String>> {
        self.rx.borrow().as_ref().and_then(|state| state.token.clone())
    }
}

/// Fixed, already-loaded session. Suits non-interactive hosts (the CLI reads
/// its token from configuration) and tests.
pub struct StaticSession {
    state: SessionState,
}

impl StaticSession {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            state: SessionState::signed_in(Secret::new(token.into())),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            state: SessionState::signed_out(),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn loaded(&self) {}

    fn signed_in(&self) -> bool {
        self.state.signed_in
    }

    async fn bearer_token(&self) -> Option<Secret<String>> {
        self.state.token.clone()
    }
}
