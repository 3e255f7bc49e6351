//! Credential providers for bearer-token attachment
//!
//! The client never owns a token. It is handed a [`TokenProvider`] at
//! construction and asks it for the current token before every request, so a
//! token set after the client was built is picked up by the next call without
//! rebuilding anything.

use std::sync::RwLock;

/// Source of the current session token.
///
/// Implementors must be cheap to query: the client calls [`token`] once per
/// outgoing request. Returning `None` means the request is sent without an
/// `Authorization` header; it is never a client-side error.
///
/// [`token`]: TokenProvider::token
pub trait TokenProvider: Send + Sync {
    /// Current session token, if any
    fn token(&self) -> Option<String>;
}

/// Process-wide session token store.
///
/// The host application's login flow calls [`set`] after a successful login
/// and [`clear`] on logout; the API client only ever reads it. This is the
/// explicit-injection replacement for browser-style ambient session storage.
///
/// [`set`]: SessionTokenStore::set
/// [`clear`]: SessionTokenStore::clear
#[derive(Debug, Default)]
pub struct SessionTokenStore {
    token: RwLock<Option<String>>,
}

impl SessionTokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session token, replacing any previous one
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().expect("token store lock poisoned") = Some(token.into());
    }

    /// Remove the stored token
    pub fn clear(&self) {
        *self.token.write().expect("token store lock poisoned") = None;
    }
}

impl TokenProvider for SessionTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().expect("token store lock poisoned").clone()
    }
}

/// Provider with a fixed token, useful for service credentials and tests
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Create a provider that always yields `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Provider that never yields a token; all requests go out unauthenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}
