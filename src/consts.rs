pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the constants shared by the API client, the
    //! controller and both renderers, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of entries to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying finished loads back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// How often the terminal UI polls for input (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Backend connection defaults
    pub mod backend {
        /// The admin panel listens on this port unless ADMIN_PORT is set.
        pub const DEFAULT_API_URL: &str = "http://localhost:3150";

        /// Environment variable overriding the configured API URL.
        pub const API_URL_ENV: &str = "WHEEL_ADMIN_API_URL";

        /// Time allowed for establishing a TCP connection (seconds).
        /// The request itself has no timeout.
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    }

    /// Admin API endpoints
    pub mod endpoints {
        pub const USERS: &str = "api/users";
        pub const STATISTICS: &str = "api/statistics";
        pub const NEW_USERS: &str = "api/statistics/new-users";
        pub const USERS_WITH_RESOURCES: &str = "api/statistics/users-with-resources";
        pub const INACTIVE_USERS: &str = "api/statistics/inactive-users";

        /// Resource listing for a single user.
        pub fn user_resources(user_id: i64) -> String {
            format!("api/users/{}/resources", user_id)
        }
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Placeholder strings shown in place of content
    pub mod text {
        pub const LOADING: &str = "Loading...";
        pub const DASH: &str = "—";
        pub const NO_ACTIONS: &str = "No actions";
        pub const USER_FALLBACK: &str = "User";
        pub const HAS_ANALYSIS: &str = "✓ Has analysis";
        pub const CLICK_HINT: &str = "Click to view the list";

        pub const NO_USERS: &str = "No users found";
        pub const NO_WHEELS: &str = "This user has no wheels";
        pub const NO_NEW_USERS: &str = "No new users found";
        pub const NO_WHEEL_CREATORS: &str = "No users found";
        pub const NO_INACTIVE_USERS: &str = "No inactive users found";

        pub const SELECT_USER: &str = "Select a user";
        pub const SELECTED_USER_PREFIX: &str = "Wheels of user: ";

        pub const APPLICATION_ERROR_PREFIX: &str = "Error: ";
        pub const TRANSPORT_ERROR_PREFIX: &str = "Loading failed: ";
    }

    /// Default `chrono` pattern for timestamps (day.month.year, hour:minute)
    pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y, %H:%M";
}
