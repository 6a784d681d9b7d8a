//! Identity Provider Client
//!
//! HTTP client for the external auth service (a GoTrue-style API). The
//! dashboard only reads the resulting session; account state lives with
//! the provider. Every call races a timeout so a hung request can never
//! leave a submit control disabled forever.

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use thiserror::Error;

use crate::state::global::{Session, User};

/// Default auth service base URL
pub const DEFAULT_AUTH_BASE: &str = "http://localhost:9999/auth/v1";

/// How long to wait before giving up on an auth call
const AUTH_TIMEOUT_MS: u32 = 10_000;

const AUTH_BASE_KEY: &str = "wifi_dashboard_auth_url";
const TOKEN_KEY: &str = "wifi_dashboard_token";

/// Auth call failures surfaced to the user
#[derive(Debug, Error)]
pub enum AuthError {
    /// Provider-reported failure, message passed through verbatim
    #[error("{0}")]
    Provider(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// The provider did not answer in time
    #[error("The request timed out. Please try again.")]
    Timeout,

    /// Anything else that went wrong during the call
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Get the auth base URL from local storage or use default
pub fn get_auth_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(AUTH_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_AUTH_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Access token persisted from the last sign-in, if any
pub fn stored_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

/// Drop the persisted token (sign-out or stale session)
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

// ============ Provider Types ============

#[derive(Debug, serde::Deserialize)]
struct SessionResponse {
    access_token: String,
    user: UserResponse,
}

#[derive(Debug, serde::Deserialize)]
struct UserResponse {
    id: String,
    email: String,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, serde::Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

impl From<UserResponse> for User {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.user_metadata.full_name,
        }
    }
}

/// Error body shapes the provider is known to produce
#[derive(Debug, Default, serde::Deserialize)]
struct ProviderError {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ProviderError {
    fn into_message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .unwrap_or_else(|| "Authentication failed".to_string())
    }
}

// ============ API Functions ============

/// Exchange credentials for a session
pub async fn sign_in(email: &str, password: &str) -> Result<Session, AuthError> {
    #[derive(serde::Serialize)]
    struct PasswordGrant {
        email: String,
        password: String,
    }

    let base = get_auth_base();
    let body = PasswordGrant {
        email: email.to_string(),
        password: password.to_string(),
    };

    let session: SessionResponse = with_timeout(async move {
        let response = Request::post(&format!("{}/token?grant_type=password", base))
            .json(&body)
            .map_err(|e| AuthError::Unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        read_json(response).await
    })
    .await?;

    store_token(&session.access_token);

    Ok(Session {
        access_token: session.access_token,
        user: session.user.into(),
    })
}

/// Register a new account.
///
/// The provider sends a confirmation email; no session comes back and
/// the caller stays anonymous until the user confirms and signs in.
pub async fn sign_up(email: &str, password: &str, full_name: &str) -> Result<(), AuthError> {
    #[derive(serde::Serialize)]
    struct SignUpRequest {
        email: String,
        password: String,
        data: SignUpMetadata,
    }

    #[derive(serde::Serialize)]
    struct SignUpMetadata {
        full_name: String,
    }

    let base = get_auth_base();
    let body = SignUpRequest {
        email: email.to_string(),
        password: password.to_string(),
        data: SignUpMetadata {
            full_name: full_name.to_string(),
        },
    };

    with_timeout(async move {
        let response = Request::post(&format!("{}/signup", base))
            .json(&body)
            .map_err(|e| AuthError::Unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(provider_error(response).await);
        }

        Ok(())
    })
    .await
}

/// Revoke the session with the provider and forget the token
pub async fn sign_out(token: &str) -> Result<(), AuthError> {
    let base = get_auth_base();
    let bearer = format!("Bearer {}", token);

    let result = with_timeout(async move {
        let response = Request::post(&format!("{}/logout", base))
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(provider_error(response).await);
        }

        Ok(())
    })
    .await;

    // The local token is cleared even when the provider call fails
    clear_token();

    result
}

/// Fetch the user behind a stored token (startup session restore)
pub async fn current_user(token: &str) -> Result<User, AuthError> {
    let base = get_auth_base();
    let bearer = format!("Bearer {}", token);

    let user: UserResponse = with_timeout(async move {
        let response = Request::get(&format!("{}/user", base))
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        read_json(response).await
    })
    .await?;

    Ok(user.into())
}

// ============ Helpers ============

async fn with_timeout<T>(
    fut: impl Future<Output = Result<T, AuthError>>,
) -> Result<T, AuthError> {
    let request = Box::pin(fut);
    let timeout = Box::pin(TimeoutFuture::new(AUTH_TIMEOUT_MS));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(AuthError::Timeout),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    if !response.ok() {
        return Err(provider_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| AuthError::Unexpected(format!("Parse error: {}", e)))
}

async fn provider_error(response: Response) -> AuthError {
    let error: ProviderError = response.json().await.unwrap_or_default();
    AuthError::Provider(error.into_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_prefers_error_description() {
        let error: ProviderError = serde_json::from_str(
            r#"{"error": "invalid_grant", "error_description": "Invalid login credentials", "msg": "other"}"#,
        )
        .unwrap();

        assert_eq!(error.into_message(), "Invalid login credentials");
    }

    #[test]
    fn provider_message_falls_back_through_shapes() {
        let error: ProviderError =
            serde_json::from_str(r#"{"code": 422, "msg": "Password should be at least 6 characters"}"#)
                .unwrap();
        assert_eq!(error.into_message(), "Password should be at least 6 characters");

        let error: ProviderError = serde_json::from_str(r#"{"message": "User already registered"}"#).unwrap();
        assert_eq!(error.into_message(), "User already registered");

        let error: ProviderError = serde_json::from_str("{}").unwrap();
        assert_eq!(error.into_message(), "Authentication failed");
    }

    #[test]
    fn user_response_maps_metadata() {
        let user: UserResponse = serde_json::from_str(
            r#"{"id": "abc-123", "email": "owner@cafe.example", "user_metadata": {"full_name": "Cafe Owner"}}"#,
        )
        .unwrap();

        let user: User = user.into();
        assert_eq!(user.email, "owner@cafe.example");
        assert_eq!(user.full_name.as_deref(), Some("Cafe Owner"));
    }
}
