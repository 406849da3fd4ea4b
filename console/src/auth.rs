// console/src/auth.rs

use client::{AdminApi, ApiError};
use models::{NewAdmin, Role};
use session::{AuthSession, SessionError, SessionGate, SessionStore};
use thiserror::Error;
use tracing::info;

/// Failures the login and signup forms show inline.
#[derive(Debug, Error)]
pub enum AuthFlowError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Api(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<ApiError> for AuthFlowError {
    fn from(err: ApiError) -> Self {
        // Status errors carry the body-extracted message; transport and
        // decode errors read as the generic one.
        match err {
            ApiError::Status { message, .. } => AuthFlowError::Api(message),
            _ => AuthFlowError::Api("Something went wrong".to_string()),
        }
    }
}

/// Registers a new administrator, the one flow that surfaces a network
/// error to the user instead of just logging it.
pub async fn signup(
    api: &dyn AdminApi,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), AuthFlowError> {
    if password != confirm_password {
        return Err(AuthFlowError::PasswordMismatch);
    }
    api.register_admin(NewAdmin {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
    .await?;
    info!(email, "admin registered");
    Ok(())
}

/// Signs an administrator in: a linear scan of the admin records by email,
/// then a plaintext comparison against what the demo API stores. On match
/// the session marker is persisted; nothing further is validated, ever.
pub async fn login<S: SessionStore>(
    api: &dyn AdminApi,
    gate: &SessionGate<S>,
    email: &str,
    password: &str,
) -> Result<AuthSession, AuthFlowError> {
    let admins = api.list_admins().await?;
    let admin = admins
        .iter()
        .find(|admin| admin.email == email)
        .ok_or(AuthFlowError::InvalidCredentials)?;
    if admin.password != password {
        return Err(AuthFlowError::InvalidCredentials);
    }

    let session = AuthSession::new(admin.email.clone(), admin.name.clone(), Role::Admin);
    gate.login(&session)?;
    info!(email, "admin signed in");
    Ok(session)
}

/// Removes the session marker.
pub fn logout<S: SessionStore>(gate: &SessionGate<S>) -> Result<(), SessionError> {
    gate.logout()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use models::Admin;
    use session::MemorySessionStore;

    fn with_admin() -> MockApi {
        MockApi {
            admins: vec![Admin {
                id: 1,
                name: "Alice Smith".to_string(),
                email: "alice@example.com".to_string(),
                password: "supersecret".to_string(),
            }],
            ..MockApi::default()
        }
    }

    #[tokio::test]
    async fn should_reject_mismatched_password_confirmation() {
        let api = MockApi::default();
        let result = signup(&api, "Alice", "alice@example.com", "secret", "secrte").await;
        assert!(matches!(result, Err(AuthFlowError::PasswordMismatch)));
        // Nothing was sent.
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn should_surface_the_api_message_on_signup_failure() {
        let api = with_admin();
        let result = signup(
            &api,
            "Alice",
            "alice@example.com",
            "supersecret",
            "supersecret",
        )
        .await;
        match result {
            Err(AuthFlowError::Api(message)) => assert_eq!(message, "Email already registered"),
            other => panic!("expected surfaced API message, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_sign_in_and_persist_the_marker() {
        let api = with_admin();
        let gate = SessionGate::new(MemorySessionStore::new());

        let session = login(&api, &gate, "alice@example.com", "supersecret")
            .await
            .unwrap();
        assert_eq!(session.email, "alice@example.com");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(gate.authorize().unwrap().email, "alice@example.com");

        logout(&gate).unwrap();
        assert!(gate.authorize().is_err());
    }

    #[tokio::test]
    async fn should_reject_bad_credentials_without_persisting() {
        let api = with_admin();
        let gate = SessionGate::new(MemorySessionStore::new());

        let wrong_password = login(&api, &gate, "alice@example.com", "nope").await;
        assert!(matches!(
            wrong_password,
            Err(AuthFlowError::InvalidCredentials)
        ));

        let unknown_email = login(&api, &gate, "bob@example.com", "supersecret").await;
        assert!(matches!(
            unknown_email,
            Err(AuthFlowError::InvalidCredentials)
        ));

        assert!(gate.authorize().is_err());
    }
}
