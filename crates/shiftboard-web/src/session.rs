//! Session context: the single authoritative read path for auth state
//!
//! One reactive signal holds the [`Session`]; localStorage (fixed key
//! `"token"`) is only touched here, never ad hoc from views. Every guard
//! decision reads the signal, so route protection re-evaluates on any
//! login/logout without a reload.

use leptos::prelude::*;
use shiftboard_core::{RouteAccess, Session, TOKEN_STORAGE_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Shared session handle, provided once at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    /// Restore whatever token the last visit persisted.
    pub fn restore() -> Self {
        let token = local_storage().and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten());
        Self {
            session: RwSignal::new(Session::from_stored(token)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    /// Guard decision for protected routes. Reactive: reading it inside a
    /// view re-runs the guard whenever the session changes.
    pub fn route_access(&self) -> RouteAccess {
        self.session.with(|s| s.route_access())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(str::to_string))
    }

    /// Persist a freshly issued token and flip the guard signal.
    pub fn store(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(TOKEN_STORAGE_KEY, token) {
                log::error!("failed to persist token: {:?}", err);
            }
        }
        self.session.set(Session::authenticated(token));
    }

    /// Logout, or forced invalidation after a 401. Idempotent.
    pub fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.remove_item(TOKEN_STORAGE_KEY) {
                log::error!("failed to clear token: {:?}", err);
            }
        }
        self.session.update(|s| s.clear());
    }
}

/// Create the session context and provide it to the component tree.
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::restore();
    provide_context(ctx);
    ctx
}

/// Access the session context from any component under the app root.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
