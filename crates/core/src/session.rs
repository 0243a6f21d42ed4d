//! Login/logout state machine.
//!
//! The machine guards the simulated login round-trip: while a login is in
//! flight the state is `Authenticating` and a second submission is a
//! conflict, which the UI surfaces by disabling the submit action. A failed
//! attempt falls back to `LoggedOut` with no partial session.

use crate::auth::UserProfile;
use crate::error::CoreError;

/// The three session states.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    LoggedOut,
    /// A login submission is awaiting its (simulated) round-trip.
    Authenticating,
    LoggedIn(UserProfile),
}

impl AuthState {
    /// Enter `Authenticating` for a new login submission.
    ///
    /// Only valid from `LoggedOut`: a duplicate submission while one is in
    /// flight, or while already logged in, is a conflict and changes
    /// nothing.
    pub fn begin(&mut self) -> Result<(), CoreError> {
        match self {
            AuthState::LoggedOut => {
                *self = AuthState::Authenticating;
                Ok(())
            }
            AuthState::Authenticating => Err(CoreError::Conflict(
                "A login attempt is already in progress".to_string(),
            )),
            AuthState::LoggedIn(_) => Err(CoreError::Conflict(
                "Already logged in; log out first".to_string(),
            )),
        }
    }

    /// Resolve the in-flight attempt. Returns whether it succeeded.
    ///
    /// From any state other than `Authenticating` this is a no-op that
    /// reports failure, so a stale completion cannot clobber a newer state.
    pub fn complete(&mut self, outcome: Option<UserProfile>) -> bool {
        if *self != AuthState::Authenticating {
            return false;
        }
        match outcome {
            Some(profile) => {
                *self = AuthState::LoggedIn(profile);
                true
            }
            None => {
                *self = AuthState::LoggedOut;
                false
            }
        }
    }

    pub fn logout(&mut self) {
        *self = AuthState::LoggedOut;
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            AuthState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, AuthState::Authenticating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_credentials;
    use assert_matches::assert_matches;

    fn alex() -> UserProfile {
        verify_credentials("alex@example.com", "password123").unwrap()
    }

    #[test]
    fn successful_login_flow() {
        let mut state = AuthState::default();
        state.begin().unwrap();
        assert!(state.is_authenticating());
        assert!(state.complete(Some(alex())));
        assert_eq!(state.user().unwrap().name, "Alex");
    }

    #[test]
    fn failed_login_returns_to_logged_out() {
        let mut state = AuthState::default();
        state.begin().unwrap();
        assert!(!state.complete(None));
        assert_eq!(state, AuthState::LoggedOut);
        assert!(state.user().is_none());
    }

    #[test]
    fn duplicate_submission_is_a_conflict() {
        let mut state = AuthState::default();
        state.begin().unwrap();
        assert_matches!(state.begin(), Err(CoreError::Conflict(_)));
        // Still authenticating; the in-flight attempt is untouched.
        assert!(state.is_authenticating());
    }

    #[test]
    fn login_while_logged_in_is_a_conflict() {
        let mut state = AuthState::LoggedIn(alex());
        assert_matches!(state.begin(), Err(CoreError::Conflict(_)));
        assert!(state.user().is_some());
    }

    #[test]
    fn stale_completion_cannot_clobber_state() {
        let mut state = AuthState::LoggedOut;
        assert!(!state.complete(Some(alex())));
        assert_eq!(state, AuthState::LoggedOut);
    }

    #[test]
    fn logout_from_any_state() {
        let mut state = AuthState::LoggedIn(alex());
        state.logout();
        assert_eq!(state, AuthState::LoggedOut);

        let mut state = AuthState::Authenticating;
        state.logout();
        assert_eq!(state, AuthState::LoggedOut);
    }
}
