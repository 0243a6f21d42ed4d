//! Session lifecycle: the auth state machine wired to its persistence.

use sublynx_core::auth::{self, UserProfile};
use sublynx_core::error::CoreError;
use sublynx_core::session::AuthState;

use crate::session_store::{SessionStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the process-wide session: one per application.
///
/// Consuming views read through [`SessionManager::user`]; the only writes
/// are [`login`](SessionManager::login) and
/// [`logout`](SessionManager::logout).
#[derive(Debug)]
pub struct SessionManager {
    state: AuthState,
    store: SessionStore,
}

impl SessionManager {
    /// Start from whatever the store holds: a persisted record goes
    /// straight to `LoggedIn` without re-validating credentials.
    pub fn restore(store: SessionStore) -> Self {
        let state = match store.load() {
            Some(profile) => {
                tracing::info!(email = %profile.email, "Restored persisted session");
                AuthState::LoggedIn(profile)
            }
            None => AuthState::LoggedOut,
        };
        Self { state, store }
    }

    /// Attempt a login with the simulated round-trip delay.
    ///
    /// Returns whether the credentials matched. While the attempt is in
    /// flight the state is `Authenticating` and a second call is a
    /// conflict. The session record is persisted before the state flips to
    /// `LoggedIn`; a failed attempt writes nothing.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<bool, SessionError> {
        self.state.begin()?;

        let outcome = auth::authenticate(email, password).await;

        if let Some(profile) = &outcome {
            if let Err(err) = self.store.save(profile) {
                // Persistence failed: abort the attempt rather than leave a
                // session that will not survive a restart half-applied.
                self.state.complete(None);
                return Err(err.into());
            }
        }

        Ok(self.state.complete(outcome))
    }

    /// Log out and remove the persisted record.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.state.logout();
        self.store.clear()?;
        Ok(())
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user()
    }

    pub fn is_authenticating(&self) -> bool {
        self.state.is_authenticating()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
