//! Session persisted in the tab's `sessionStorage`

use cra_core::{ClientError, ClientResult, Session, SessionStore, User};
use leptos::RwSignal;

const SESSION_KEY: &str = "cra.user";

pub type AppSession = RwSignal<Session<BrowserSessionStore>>;

/// Survives a reload of the tab, gone when the tab closes
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

fn storage() -> ClientResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.session_storage().ok().flatten())
        .ok_or_else(|| ClientError::Storage("sessionStorage is unavailable".to_string()))
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<User> {
        let raw = storage().ok()?.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                None
            }
        }
    }

    fn save(&self, user: &User) -> ClientResult<()> {
        let raw = serde_json::to_string(user).map_err(|e| ClientError::Storage(e.to_string()))?;
        storage()?
            .set_item(SESSION_KEY, &raw)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> ClientResult<()> {
        storage()?
            .remove_item(SESSION_KEY)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }
}
