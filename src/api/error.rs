//! Error handling for the admin API module

use crate::consts::cli_consts::text::{APPLICATION_ERROR_PREFIX, TRANSPORT_ERROR_PREFIX};
use crate::models::Envelope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body was not the JSON the endpoint promises.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx status without a readable envelope.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The server answered `success: false`; carries its reason verbatim.
    #[error("{0}")]
    Application(String),

    /// The server answered `success: true` but left out the payload.
    #[error("Response carried no data")]
    MissingData,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        Self::from_status_and_body(status, message)
    }

    /// The backend reports handler failures as HTTP 500 with a regular
    /// envelope, so a failed status is only a transport error when the body
    /// is not an envelope.
    pub fn from_status_and_body(status: u16, body: String) -> ApiError {
        match serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            Ok(envelope) if !envelope.success => ApiError::Application(
                envelope.error.unwrap_or_else(|| "unknown error".to_string()),
            ),
            _ => ApiError::Http {
                status,
                message: body,
            },
        }
    }

    /// Whether the server itself reported the failure.
    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Application(_))
    }

    /// The text shown to the user in place of the failed container's content.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application(reason) => format!("{}{}", APPLICATION_ERROR_PREFIX, reason),
            other => format!("{}{}", TRANSPORT_ERROR_PREFIX, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_envelope_with_500_is_application_error() {
        let body = r#"{"success":false,"error":"database is locked"}"#.to_string();
        let error = ApiError::from_status_and_body(500, body);
        assert!(error.is_application());
        assert_eq!(error.user_message(), "Error: database is locked");
    }

    #[test]
    fn test_plain_500_is_transport_error() {
        let error = ApiError::from_status_and_body(502, "Bad Gateway".to_string());
        assert!(!error.is_application());
        assert_eq!(
            error.user_message(),
            "Loading failed: HTTP error with status 502: Bad Gateway"
        );
    }

    #[test]
    fn test_failed_envelope_without_reason() {
        let body = r#"{"success":false}"#.to_string();
        let error = ApiError::from_status_and_body(500, body);
        assert_eq!(error.user_message(), "Error: unknown error");
    }

    #[test]
    fn test_missing_data_message() {
        assert_eq!(
            ApiError::MissingData.user_message(),
            "Loading failed: Response carried no data"
        );
    }
}
