//! Admin API Client
//!
//! A JSON client for the bot's admin panel backend. Every endpoint answers
//! with an `{success, data, error}` envelope which is unwrapped here.

use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::backend::CONNECT_TIMEOUT_SECS;
use crate::consts::cli_consts::endpoints;
use crate::models::{
    Envelope, InactiveUserRow, NewUserRow, StatisticsSummary, User, Wheel, WheelCreatorRow,
};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("wheel-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
}

impl AdminApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Parse an envelope and return its payload, or the server's reason.
    fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, ApiError> {
        let envelope: Envelope<T> = serde_json::from_slice(bytes)?;
        if !envelope.success {
            return Err(ApiError::Application(
                envelope.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        Ok(envelope.data)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ApiError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_envelope(&response_bytes)
    }

    /// A missing payload on a list endpoint means an empty list.
    async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ApiError> {
        Ok(self.get_request(endpoint).await?.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl AdminApi for AdminApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list(endpoints::USERS).await
    }

    async fn list_user_wheels(&self, user_id: i64) -> Result<Vec<Wheel>, ApiError> {
        self.get_list(&endpoints::user_resources(user_id)).await
    }

    async fn statistics(&self) -> Result<StatisticsSummary, ApiError> {
        self.get_request(endpoints::STATISTICS)
            .await?
            .ok_or(ApiError::MissingData)
    }

    async fn new_users(&self) -> Result<Vec<NewUserRow>, ApiError> {
        self.get_list(endpoints::NEW_USERS).await
    }

    async fn wheel_creators(&self) -> Result<Vec<WheelCreatorRow>, ApiError> {
        self.get_list(endpoints::USERS_WITH_RESOURCES).await
    }

    async fn inactive_users(&self) -> Result<Vec<InactiveUserRow>, ApiError> {
        self.get_list(endpoints::INACTIVE_USERS).await
    }
}

#[cfg(test)]
/// These are ignored by default since they require a running admin backend.
mod live_backend_tests {
    use crate::api::AdminApi;
    use crate::consts::cli_consts::backend::DEFAULT_API_URL;

    #[tokio::test]
    #[ignore] // This test requires a live admin backend.
    /// Should list the users known to the backend.
    async fn test_list_users() {
        let client = super::AdminApiClient::new(DEFAULT_API_URL).unwrap();
        match client.list_users().await {
            Ok(users) => println!("Got {} users", users.len()),
            Err(e) => panic!("Failed to list users: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live admin backend.
    /// Should return the 30-day counters.
    async fn test_statistics() {
        let client = super::AdminApiClient::new(DEFAULT_API_URL).unwrap();
        match client.statistics().await {
            Ok(summary) => println!("Statistics: {:?}", summary),
            Err(e) => panic!("Failed to load statistics: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Base URL and endpoint are joined with exactly one slash.
    fn test_build_url() {
        let client = AdminApiClient::new("http://localhost:3150/").unwrap();
        assert_eq!(
            client.build_url("/api/users"),
            "http://localhost:3150/api/users"
        );
        assert_eq!(
            client.build_url(&endpoints::user_resources(42)),
            "http://localhost:3150/api/users/42/resources"
        );
    }

    #[test]
    fn test_decode_successful_envelope() {
        let body = br#"{"success":true,"data":[{"name":"Q1","created_at":null,"has_analysis":true}]}"#;
        let wheels: Option<Vec<Wheel>> = AdminApiClient::decode_envelope(body).unwrap();
        let wheels = wheels.unwrap();
        assert_eq!(wheels.len(), 1);
        assert_eq!(wheels[0].name, "Q1");
        assert!(wheels[0].has_analysis);
    }

    #[test]
    fn test_decode_failed_envelope_keeps_reason() {
        let body = br#"{"success":false,"error":"no such table: users"}"#;
        let result: Result<Option<Vec<User>>, ApiError> = AdminApiClient::decode_envelope(body);
        match result {
            Err(ApiError::Application(reason)) => assert_eq!(reason, "no such table: users"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_malformed_body() {
        let result: Result<Option<Vec<User>>, ApiError> =
            AdminApiClient::decode_envelope(b"<html>oops</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    /// A refused connection surfaces as a transport error, not a panic.
    async fn test_unreachable_backend_is_transport_error() {
        let client = AdminApiClient::new("http://127.0.0.1:9").unwrap();
        let error = client.list_users().await.unwrap_err();
        assert!(!error.is_application());
        assert!(error.user_message().starts_with("Loading failed: "));
    }
}
