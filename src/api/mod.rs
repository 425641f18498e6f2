use crate::api::error::ApiError;
use crate::models::{InactiveUserRow, NewUserRow, StatisticsSummary, User, Wheel, WheelCreatorRow};

pub(crate) mod client;
pub use client::AdminApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Read-only view of the admin HTTP API.
///
/// Every call is a single GET with no retry; failures come back as
/// [`ApiError`] for the caller to render.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// All users, with the date of their last logged action.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Wheels created by one user.
    async fn list_user_wheels(&self, user_id: i64) -> Result<Vec<Wheel>, ApiError>;

    /// Counters for the last 30 days.
    async fn statistics(&self) -> Result<StatisticsSummary, ApiError>;

    /// Users who joined in the last 30 days.
    async fn new_users(&self) -> Result<Vec<NewUserRow>, ApiError>;

    /// Users who created wheels in the last 30 days.
    async fn wheel_creators(&self) -> Result<Vec<WheelCreatorRow>, ApiError>;

    /// Users active last month but not this month.
    async fn inactive_users(&self) -> Result<Vec<InactiveUserRow>, ApiError>;
}
