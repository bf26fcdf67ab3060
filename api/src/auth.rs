//! Account API client: login and signup.
//!
//! The server owns all credential validation; the client just relays the
//! outcome. Successful logins hand back an opaque token plus the profile
//! fields the header and dashboard care about.

use serde::{Deserialize, Serialize};

use crate::ApiError;

const DEFAULT_BASE_URL: &str = "https://api.trove-archive.org";

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct Registration<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub credits: u32,
}

/// Outcome of a successful login.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginSession {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
struct AckEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client against the deployment configured at build time.
    pub fn from_env() -> Self {
        Self::new(option_env!("TROVE_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/v1/user/login", self.base_url))
            .json(&Credentials { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let envelope: LoginEnvelope = response.json().await?;
        match envelope {
            LoginEnvelope {
                success: true,
                token: Some(token),
                user,
                ..
            } => Ok(LoginSession {
                token,
                user: user.unwrap_or(UserProfile { credits: 0 }),
            }),
            LoginEnvelope { message, .. } => Err(ApiError::Rejected(
                message.unwrap_or_else(|| "Invalid email or password.".to_string()),
            )),
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/api/v1/user/register", self.base_url))
            .json(&Registration {
                name,
                email,
                password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let ack: AckEnvelope = response.json().await?;
        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(
                ack.message
                    .unwrap_or_else(|| "Signup was rejected.".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn login_success_yields_token_and_profile() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/user/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "token": "tok-123",
                "user": { "credits": 42 }
            })))
            .mount(&server)
            .await;

        let session = AuthClient::new(server.uri())
            .login("someone@example.com", "hunter2")
            .await
            .expect("login should succeed");

        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.credits, 42);
    }

    #[tokio::test]
    async fn login_rejection_carries_server_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/user/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "message": "Wrong password"
            })))
            .mount(&server)
            .await;

        let err = AuthClient::new(server.uri())
            .login("someone@example.com", "nope")
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Wrong password");
    }

    #[tokio::test]
    async fn register_success_is_unit() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/user/register"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
            )
            .mount(&server)
            .await;

        AuthClient::new(server.uri())
            .register("Someone", "someone@example.com", "hunter2")
            .await
            .expect("registration should succeed");
    }

    #[tokio::test]
    async fn http_errors_become_status_variants() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/user/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = AuthClient::new(server.uri())
            .login("someone@example.com", "hunter2")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }
}
