//! Mock authentication flow layered on the storage surface.
//!
//! No identity provider is involved: logging in generates a local token and
//! user record from the clock, the way the demo app fakes it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::storage::{keys, Storage};

/// Locally persisted user info.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub nickname: String,
    /// Login timestamp, epoch milliseconds.
    pub login_time: i64,
}

/// Snapshot of the current auth state.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Mock auth service over a [`Storage`].
#[derive(Clone)]
pub struct Auth {
    storage: Storage,
}

impl Auth {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Logs in with a nickname, persisting a generated token and user info.
    pub fn login(&self, nickname: &str) -> Result<UserInfo, ServiceError> {
        let now = Utc::now().timestamp_millis();
        let user_info = UserInfo {
            id: now,
            nickname: nickname.to_string(),
            login_time: now,
        };
        let token = format!("token_{}_{}", user_info.id, now);

        self.storage.set(keys::TOKEN, &token)?;
        self.storage.set(keys::USER_INFO, &user_info)?;
        Ok(user_info)
    }

    /// Clears the token and user info.
    pub fn logout(&self) -> Result<(), ServiceError> {
        self.storage.remove(keys::TOKEN)?;
        self.storage.remove(keys::USER_INFO)
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(keys::TOKEN)
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.storage.get(keys::USER_INFO)
    }

    /// Whether a token is currently stored.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Full auth snapshot: logged-in flag, token, and user info.
    pub fn auth_state(&self) -> AuthState {
        let token = self.token();
        AuthState {
            is_logged_in: token.is_some(),
            token,
            user_info: self.user_info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_persists_token_and_user_info() {
        let auth = Auth::new(Storage::in_memory());
        let user = auth.login("alice").unwrap();

        assert_eq!(user.nickname, "alice");
        assert_eq!(user.id, user.login_time);

        let token = auth.token().unwrap();
        assert!(token.starts_with("token_"));
        assert_eq!(auth.user_info(), Some(user));
        assert!(auth.is_logged_in());
    }

    #[test]
    fn logout_clears_everything() {
        let auth = Auth::new(Storage::in_memory());
        auth.login("alice").unwrap();
        auth.logout().unwrap();

        assert!(!auth.is_logged_in());
        assert_eq!(auth.token(), None);
        assert_eq!(auth.user_info(), None);
    }

    #[test]
    fn auth_state_reflects_storage() {
        let auth = Auth::new(Storage::in_memory());

        let state = auth.auth_state();
        assert!(!state.is_logged_in);
        assert!(state.token.is_none());
        assert!(state.user_info.is_none());

        let user = auth.login("bob").unwrap();
        let state = auth.auth_state();
        assert!(state.is_logged_in);
        assert_eq!(state.user_info, Some(user));
    }
}
