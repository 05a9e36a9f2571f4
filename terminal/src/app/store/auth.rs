//! Session slice: logged-in user and bearer token.

use shared::UserProfile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSlice {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    LoginRequest,
    LoginSuccess {
        token: String,
        user: Option<UserProfile>,
    },
    LoginFailure(String),
    /// Token found in storage at startup, profile not yet loaded
    SessionRestored(String),
    GetMeRequest,
    GetMeSuccess(UserProfile),
    GetMeFailure(String),
    Logout,
}

pub fn reduce(state: AuthSlice, action: AuthAction) -> AuthSlice {
    match action {
        AuthAction::LoginRequest | AuthAction::GetMeRequest => AuthSlice {
            loading: true,
            error: None,
            ..state
        },
        AuthAction::LoginSuccess { token, user } => AuthSlice {
            user,
            token: Some(token),
            loading: false,
            error: None,
        },
        AuthAction::SessionRestored(token) => AuthSlice {
            token: Some(token),
            ..state
        },
        AuthAction::GetMeSuccess(user) => AuthSlice {
            user: Some(user),
            loading: false,
            error: None,
            ..state
        },
        AuthAction::LoginFailure(error) | AuthAction::GetMeFailure(error) => AuthSlice {
            user: None,
            token: None,
            loading: false,
            error: Some(error),
        },
        AuthAction::Logout => AuthSlice::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: Some("Siti".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_cycle() {
        let state = reduce(AuthSlice::default(), AuthAction::LoginRequest);
        assert!(state.loading);

        let state = reduce(
            state,
            AuthAction::LoginSuccess {
                token: "t".to_string(),
                user: Some(profile()),
            },
        );
        assert!(!state.loading);
        assert_eq!(state.token.as_deref(), Some("t"));
        assert_eq!(state.user, Some(profile()));
    }

    #[test]
    fn test_failure_clears_session() {
        let logged_in = AuthSlice {
            user: Some(profile()),
            token: Some("t".to_string()),
            loading: true,
            error: None,
        };

        let state = reduce(logged_in, AuthAction::GetMeFailure("Session expired".to_string()));
        assert_eq!(state.user, None);
        assert_eq!(state.token, None);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Session expired"));
    }

    #[test]
    fn test_request_clears_previous_error() {
        let failed = reduce(AuthSlice::default(), AuthAction::LoginFailure("Password salah".to_string()));
        let state = reduce(failed, AuthAction::LoginRequest);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_restored_session_then_profile() {
        let state = reduce(AuthSlice::default(), AuthAction::SessionRestored("stored".to_string()));
        let state = reduce(state, AuthAction::GetMeRequest);
        let state = reduce(state, AuthAction::GetMeSuccess(profile()));

        assert_eq!(state.token.as_deref(), Some("stored"));
        assert_eq!(state.user, Some(profile()));
    }

    #[test]
    fn test_logout_resets() {
        let state = AuthSlice {
            user: Some(profile()),
            token: Some("t".to_string()),
            loading: true,
            error: Some("x".to_string()),
        };
        assert_eq!(reduce(state, AuthAction::Logout), AuthSlice::default());
    }
}
