//! Event System
//!
//! Load requests, their completions, and the activity log entries the
//! dashboard shows.

use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::dashboard::ledger::{Slot, Ticket};
use crate::dashboard::state::DrillDown;
use crate::logging::{LogLevel, should_log_with_env};
use crate::models::{DetailRows, StatisticsSummary, User, Wheel};
use chrono::Local;
use std::fmt::Display;

/// One network request the controller can issue.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Fetch {
    /// User table on the users tab.
    Users,
    /// User list on the wheels tab.
    Owners,
    /// Wheels of one user.
    Wheels(i64),
    Statistics,
    Details(DrillDown),
}

impl Fetch {
    /// The container this request renders into.
    pub fn slot(&self) -> Slot {
        match self {
            Fetch::Users => Slot::UsersTable,
            Fetch::Owners => Slot::OwnerList,
            Fetch::Wheels(_) => Slot::WheelList,
            Fetch::Statistics => Slot::Statistics,
            Fetch::Details(_) => Slot::Modal,
        }
    }

    /// Perform the request.
    pub async fn run(self, api: &dyn AdminApi) -> Result<Payload, ApiError> {
        match self {
            Fetch::Users => api.list_users().await.map(Payload::Users),
            Fetch::Owners => api.list_users().await.map(Payload::Owners),
            Fetch::Wheels(user_id) => api
                .list_user_wheels(user_id)
                .await
                .map(|wheels| Payload::Wheels { user_id, wheels }),
            Fetch::Statistics => api.statistics().await.map(Payload::Statistics),
            Fetch::Details(DrillDown::NewUsers) => api
                .new_users()
                .await
                .map(|rows| Payload::Details(DetailRows::NewUsers(rows))),
            Fetch::Details(DrillDown::WheelCreators) => api
                .wheel_creators()
                .await
                .map(|rows| Payload::Details(DetailRows::WheelCreators(rows))),
            Fetch::Details(DrillDown::InactiveUsers) => api
                .inactive_users()
                .await
                .map(|rows| Payload::Details(DetailRows::InactiveUsers(rows))),
        }
    }
}

impl Display for Fetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fetch::Users => write!(f, "users"),
            Fetch::Owners => write!(f, "wheel owners"),
            Fetch::Wheels(user_id) => write!(f, "wheels of user {}", user_id),
            Fetch::Statistics => write!(f, "statistics"),
            Fetch::Details(kind) => write!(f, "{} details", kind),
        }
    }
}

/// Successful result of a [`Fetch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Users(Vec<User>),
    Owners(Vec<User>),
    Wheels { user_id: i64, wheels: Vec<Wheel> },
    Statistics(StatisticsSummary),
    Details(DetailRows),
}

/// A finished request, sent from the spawned task back to the UI loop.
#[derive(Debug)]
pub struct LoadEvent {
    pub ticket: Ticket,
    pub fetch: Fetch,
    pub outcome: Result<Payload, ApiError>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Entry of the in-memory activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh(msg: String) -> Self {
        Self::new(msg, EventType::Refresh, LogLevel::Debug)
    }

    pub fn success(msg: String) -> Self {
        Self::new(msg, EventType::Success, LogLevel::Info)
    }

    /// A failed load. Server-reported failures are warnings, transport
    /// failures errors.
    pub fn error(msg: String, log_level: LogLevel) -> Self {
        Self::new(msg, EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAdminApi;

    #[test]
    fn test_fetch_slots() {
        assert_eq!(Fetch::Users.slot(), Slot::UsersTable);
        assert_eq!(Fetch::Owners.slot(), Slot::OwnerList);
        assert_eq!(Fetch::Wheels(3).slot(), Slot::WheelList);
        assert_eq!(Fetch::Statistics.slot(), Slot::Statistics);
        assert_eq!(Fetch::Details(DrillDown::InactiveUsers).slot(), Slot::Modal);
    }

    #[tokio::test]
    async fn test_wheels_fetch_carries_user_id() {
        let mut api = MockAdminApi::new();
        api.expect_list_user_wheels()
            .withf(|user_id| *user_id == 9)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let payload = Fetch::Wheels(9).run(&api).await.unwrap();
        assert_eq!(
            payload,
            Payload::Wheels {
                user_id: 9,
                wheels: Vec::new()
            }
        );
    }

    #[tokio::test]
    async fn test_details_fetch_calls_matching_endpoint() {
        let mut api = MockAdminApi::new();
        api.expect_wheel_creators()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let payload = Fetch::Details(DrillDown::WheelCreators)
            .run(&api)
            .await
            .unwrap();
        assert_eq!(payload, Payload::Details(DetailRows::WheelCreators(Vec::new())));
    }

    #[test]
    fn test_error_events_are_displayed() {
        let event = Event::error("Loading failed".to_string(), LogLevel::Error);
        assert!(event.should_display());
        assert!(event.to_string().starts_with("Error ["));
    }
}
