//! Admin API client: account listing and dashboard statistics.
//!
//! Consumed only by the dashboard shell behind the session gate.

use serde::Deserialize;

use crate::ApiError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub payment_done: bool,
    #[serde(default)]
    pub package: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub users_this_month: u32,
    #[serde(default)]
    pub uploads_this_month: u32,
    #[serde(default)]
    pub questions_asked: u32,
    #[serde(default)]
    pub active_subscriptions: u32,
}

#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    success: bool,
    #[serde(default)]
    users: Vec<AccountRecord>,
}

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    success: bool,
    #[serde(default)]
    stats: DashboardStats,
}

#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("TROVE_API_URL").unwrap_or("https://api.trove-archive.org"))
    }

    pub async fn fetch_users(&self) -> Result<Vec<AccountRecord>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/v1/user/get", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let envelope: UsersEnvelope = response.json().await?;
        if envelope.success {
            Ok(envelope.users)
        } else {
            Err(ApiError::Rejected("Unexpected user listing reply.".into()))
        }
    }

    pub async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/v1/admin/stats", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let envelope: StatsEnvelope = response.json().await?;
        if envelope.success {
            Ok(envelope.stats)
        } else {
            Err(ApiError::Rejected("Unexpected statistics reply.".into()))
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

    #[test]
    fn account_record_accepts_camel_case_payload() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "credits": 7,
            "paymentDone": true,
            "package": "pro"
        }"#;

        let record: AccountRecord = serde_json::from_str(json).expect("Should deserialize");
        assert!(record.payment_done);
        assert_eq!(record.package.as_deref(), Some("pro"));
    }

    #[test]
    fn missing_package_defaults_to_none() {
        let json = r#"{"name": "Ada", "email": "ada@example.com"}"#;
        let record: AccountRecord = serde_json::from_str(json).expect("Should deserialize");
        assert!(record.package.is_none());
        assert!(!record.payment_done);
    }

    #[tokio::test]
    async fn fetch_users_unwraps_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/user/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "users": [
                    {"name": "Ada", "email": "ada@example.com", "credits": 3, "paymentDone": false}
                ]
            })))
            .mount(&server)
            .await;

        let users = AdminClient::new(server.uri())
            .fetch_users()
            .await
            .expect("listing should succeed");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ada");
    }

    #[tokio::test]
    async fn fetch_stats_unwraps_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/admin/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "stats": {"usersThisMonth": 12, "questionsAsked": 90}
            })))
            .mount(&server)
            .await;

        let stats = AdminClient::new(server.uri())
            .fetch_stats()
            .await
            .expect("stats should succeed");
        assert_eq!(stats.users_this_month, 12);
        assert_eq!(stats.questions_asked, 90);
        assert_eq!(stats.uploads_this_month, 0);
    }
}
