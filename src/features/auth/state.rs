//! Auth session state and context for the frontend. The provider hydrates the
//! session from `localStorage` once on mount and exposes it as a signal, so
//! guards re-run when the user signs in or out. Only the session record lives
//! in the signal; the bearer token stays in storage.

use crate::{
    app_lib::storage::LocalSessionStore,
    features::auth::{
        session::{Session, SessionProvider},
        types::LoginResponse,
    },
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Persists the login result and publishes the new session.
    pub fn set_session(&self, response: &LoginResponse) {
        let session = Session::from(response);
        LocalSessionStore.save(&session, &response.token);
        tracing::info!(account_id = session.id, role = %session.role_name, "signed in");
        self.session.set(Some(session));
    }

    /// Forgets the session, typically on logout or an expired token.
    pub fn clear_session(&self) {
        LocalSessionStore.clear();
        self.session.set(None);
    }
}

/// Provides auth context hydrated from storage.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(LocalSessionStore.load());
    provide_context(AuthContext::new(session));

    view! { {children()} }
}

/// Returns the current auth context or a fallback context read from storage.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(LocalSessionStore.load())))
}
