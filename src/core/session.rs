//! Process-wide session state (auth token, cookie consent) behind a single
//! injectable store instead of ad hoc storage reads.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Result;


pub const TOKEN_KEY: &str = "token";
pub const CONSENT_KEY: &str = "cookie_consent";


pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String);

    fn remove(&self, key: &str);
}


#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthToken {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}


/// Typed view over a [`SessionStore`].
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }


    pub fn sign_in(&self, token: AuthToken) -> Result<()> {
        let encoded = serde_json::to_string(&token)?;
        self.store.set(TOKEN_KEY, encoded);
        debug!("Session token stored");
        Ok(())
    }


    pub fn sign_out(&self) {
        self.store.remove(TOKEN_KEY);
        debug!("Session token cleared");
    }

    /// Stored token, or `None` when absent, unreadable or expired.
    pub fn token(&self) -> Option<AuthToken> {
        self.token_at(Utc::now())
    }

    pub fn token_at(&self, now: DateTime<Utc>) -> Option<AuthToken> {
        let raw = self.store.get(TOKEN_KEY)?;
        let token: AuthToken = serde_json::from_str(&raw).ok()?;
        if token.is_expired_at(now) {
            return None;
        }
        Some(token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }


    pub fn bearer_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t.value))
    }


    pub fn cookie_consent(&self) -> Option<bool> {
        self.store.get(CONSENT_KEY).map(|v| v == "accepted")
    }

    pub fn set_cookie_consent(&self, accepted: bool) {
        let value = if accepted { "accepted" } else { "declined" };
        self.store.set(CONSENT_KEY, value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.is_empty());
        store.set("k", "v".to_string());
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer_header(), None);

        session
            .sign_in(AuthToken {
                value: "abc".to_string(),
                expires_at: None,
            })
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.bearer_header().as_deref(), Some("Bearer abc"));

        session.sign_out();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_expired_token_is_ignored() {
        let session = Session::in_memory();
        let now = Utc::now();
        session
            .sign_in(AuthToken {
                value: "old".to_string(),
                expires_at: Some(now - Duration::minutes(5)),
            })
            .unwrap();
        assert_eq!(session.token_at(now), None);
    }

    #[test]
    fn test_garbage_token_is_ignored() {
        let store = Arc::new(MemorySessionStore::new());
        store.set(TOKEN_KEY, "not json".to_string());
        let session = Session::new(store);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_cookie_consent() {
        let session = Session::in_memory();
        assert_eq!(session.cookie_consent(), None);
        session.set_cookie_consent(true);
        assert_eq!(session.cookie_consent(), Some(true));
        session.set_cookie_consent(false);
        assert_eq!(session.cookie_consent(), Some(false));
    }

    #[test]
    fn test_shared_store_is_visible_across_sessions() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let a = Session::new(Arc::clone(&store));
        let b = Session::new(store);
        a.set_cookie_consent(true);
        assert_eq!(b.cookie_consent(), Some(true));
    }
}
