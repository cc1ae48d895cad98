//! Persistence of the session token pair across page reloads.
//!
//! The `SessionStore` itself lives in `payloads` and knows nothing about the
//! browser; this module is the only place that touches `localStorage`. The
//! pair is written back at the auth seams (login, logout, the startup
//! session probe), which also captures any token rotation those calls
//! triggered.

use payloads::{Session, SessionStore};

const SESSION_STORAGE_KEY: &str = "praxis.session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Build the app-wide session store, seeded from any persisted session.
pub fn restore() -> SessionStore {
    let Some(storage) = local_storage() else {
        return SessionStore::new();
    };
    match storage.get_item(SESSION_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
            Ok(session) => SessionStore::with_session(session),
            Err(e) => {
                tracing::warn!("discarding unreadable persisted session: {e}");
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
                SessionStore::new()
            }
        },
        _ => SessionStore::new(),
    }
}

/// Write the store's current session to local storage, or clear the key if
/// the store is empty.
pub fn persist(store: &SessionStore) {
    let Some(storage) = local_storage() else {
        return;
    };
    match store.get() {
        Some(session) => match serde_json::to_string(&session) {
            Ok(raw) => {
                let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
            }
            Err(e) => tracing::warn!("failed to serialize session: {e}"),
        },
        None => {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}
