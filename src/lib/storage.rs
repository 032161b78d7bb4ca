//! Browser `localStorage` access for the persisted session and bearer token.
//! Storage failures (private mode, quota, disabled storage) degrade to "no
//! session" rather than surfacing errors.

use crate::features::auth::session::{SESSION_KEY, Session, SessionProvider, TOKEN_KEY};
use secrecy::SecretString;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Session provider backed by `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    /// Loads the bearer token saved at login.
    pub fn token(&self) -> Option<SecretString> {
        let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(SecretString::from(trimmed.to_string()))
        }
    }

    /// Persists the session record and token after a successful login.
    pub fn save(&self, session: &Session, token: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable; session will not survive reloads");
            return;
        };
        let Some(raw) = session.to_json() else {
            return;
        };
        if storage.set_item(SESSION_KEY, &raw).is_err() || storage.set_item(TOKEN_KEY, token).is_err()
        {
            tracing::warn!("failed to persist session");
        }
    }

    /// Removes the session record and token.
    pub fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

impl SessionProvider for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
        Session::from_json(&raw)
    }
}
