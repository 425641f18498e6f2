//! View models returned by the admin API
//!
//! All of these are read-only: the dashboard never mutates or persists them.

use serde::{Deserialize, Serialize};

/// The `{success, data, error}` wrapper every admin API response uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// A bot user as listed on the users tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_action_date: Option<String>,
}

/// A wheel of life created by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheel {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub has_analysis: bool,
}

/// Counters over the trailing 30-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub new_users: u64,
    pub wheels_created: u64,
    /// Users active in the previous month but not in the current one.
    pub inactive_users: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRow {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelCreatorRow {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub wheels_count: u64,
    #[serde(default)]
    pub last_wheel_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactiveUserRow {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub last_wheel_date: Option<String>,
}

/// Rows of whichever drill-down table the modal is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRows {
    NewUsers(Vec<NewUserRow>),
    WheelCreators(Vec<WheelCreatorRow>),
    InactiveUsers(Vec<InactiveUserRow>),
}

impl DetailRows {
    pub fn len(&self) -> usize {
        match self {
            DetailRows::NewUsers(rows) => rows.len(),
            DetailRows::WheelCreators(rows) => rows.len(),
            DetailRows::InactiveUsers(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_data_or_error() {
        let envelope: Envelope<Vec<User>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_user_with_nulls() {
        let json = r#"{
            "id": 7,
            "telegram_id": 123456,
            "first_name": null,
            "username": null,
            "created_at": "2024-03-01T10:00:00",
            "last_action_date": null
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.first_name.is_none());
        assert_eq!(user.created_at.as_deref(), Some("2024-03-01T10:00:00"));
    }

    #[test]
    fn test_statistics_summary_shape() {
        let json = r#"{"new_users":5,"wheels_created":3,"inactive_users":2}"#;
        let summary: StatisticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(
            summary,
            StatisticsSummary {
                new_users: 5,
                wheels_created: 3,
                inactive_users: 2
            }
        );
    }

    #[test]
    fn test_detail_rows_len() {
        let rows = DetailRows::InactiveUsers(vec![InactiveUserRow {
            id: 1,
            telegram_id: 2,
            first_name: None,
            username: None,
            last_wheel_date: None,
        }]);
        assert_eq!(rows.len(), 1);
        assert!(DetailRows::NewUsers(Vec::new()).is_empty());
    }
}
