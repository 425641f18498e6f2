//! Session setup and initialization

use crate::api::error::ApiError;
use crate::api::{AdminApi, AdminApiClient};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::dashboard::Controller;
use crate::events::LoadEvent;
use log::info;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both the terminal dashboard and snapshot modes
pub struct SessionData {
    /// Controller owning the dashboard state
    pub controller: Controller,
    /// Receives finished loads from fetch tasks
    pub event_receiver: mpsc::Receiver<LoadEvent>,
    /// Backend the session talks to
    pub api_url: String,
}

impl SessionData {
    /// Wire a controller to `api` over a fresh event channel.
    pub fn with_api(api: Arc<dyn AdminApi>, api_url: String, date_format: &str) -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<LoadEvent>(EVENT_QUEUE_SIZE);
        let controller = Controller::new(api, event_sender, date_format.to_string());
        Self {
            controller,
            event_receiver,
            api_url,
        }
    }
}

/// Sets up a session against the admin API at `api_url`
///
/// # Errors
/// Fails when the HTTP client cannot be built.
pub fn setup_session(api_url: &str, date_format: &str) -> Result<SessionData, ApiError> {
    let client = AdminApiClient::new(api_url)?;
    info!("Using admin API at {}", client.base_url());
    Ok(SessionData::with_api(
        Arc::new(client),
        api_url.to_string(),
        date_format,
    ))
}
