//! Per-view HTML rendering
//!
//! Pure functions from dashboard state to markup. maud escapes every
//! interpolated string, so names, handles, wheel names and server error
//! texts can never inject markup. Integers are written as-is.

use super::document::{Document, MountPoint};
use crate::consts::cli_consts::text::{
    CLICK_HINT, DASH, HAS_ANALYSIS, LOADING, NO_USERS, NO_WHEELS, SELECT_USER, USER_FALLBACK,
};
use crate::dashboard::{DashboardState, DrillDown, Panel};
use crate::format::{
    display_last_action, display_name, display_username, escape_html, format_timestamp,
};
use crate::models::{DetailRows, StatisticsSummary, User, Wheel};
use maud::{Markup, PreEscaped, html};

/// Columns of the users table.
const USERS_COLUMNS: u8 = 6;

/// Render every mount point of the dashboard.
pub fn render_document(state: &DashboardState) -> Document {
    let mut document = Document::new(
        state.active_tab,
        state.modal.open,
        state.modal.open && state.modal.content.is_loading(),
    );
    let pattern = state.date_format.as_str();

    document.mount(MountPoint::UsersTbody, users_rows(&state.users, pattern));
    document.mount(MountPoint::UsersList, owner_list(state));
    document.mount(MountPoint::SelectedUserName, selected_user_label(state));
    document.mount(MountPoint::WheelsList, wheel_list(&state.wheels, pattern));
    document.mount(
        MountPoint::StatisticsContent,
        statistics_cards(&state.statistics),
    );
    document.mount(
        MountPoint::ModalTitle,
        PreEscaped(escape_html(state.modal.title())),
    );
    if let Some(kind) = state.modal.drill_down {
        document.mount(
            MountPoint::ModalData,
            detail_table(kind, &state.modal.content, pattern),
        );
    }
    document
}

/// Rows of `users-tbody`. Placeholders span the whole table.
pub fn users_rows(users: &Panel<Vec<User>>, pattern: &str) -> Markup {
    match users {
        Panel::Idle => html! {},
        Panel::Loading => table_placeholder("loading", LOADING),
        Panel::Empty => table_placeholder("empty-state", NO_USERS),
        Panel::Failed(message) => table_placeholder("empty-state", message),
        Panel::Ready(users) => html! {
            @for user in users {
                tr {
                    td { (user.id) }
                    td { (user.telegram_id) }
                    td { (display_name(user.first_name.as_deref(), DASH)) }
                    td { (display_username(user.username.as_deref())) }
                    td { (format_timestamp(user.created_at.as_deref(), pattern)) }
                    td { (display_last_action(user.last_action_date.as_deref(), pattern)) }
                }
            }
        },
    }
}

fn table_placeholder(class: &str, text: &str) -> Markup {
    html! {
        tr { td class=(class) colspan=(USERS_COLUMNS) { (text) } }
    }
}

fn placeholder(class: &str, text: &str) -> Markup {
    html! { div class=(class) { (text) } }
}

/// Items of `users-list`; the selected user carries the `active` class.
pub fn owner_list(state: &DashboardState) -> Markup {
    let selected = state.selection().map(|selection| selection.user_id);
    match &state.owners {
        Panel::Idle => html! {},
        Panel::Loading => placeholder("loading", LOADING),
        Panel::Empty => placeholder("empty-state", NO_USERS),
        Panel::Failed(message) => placeholder("empty-state", message),
        Panel::Ready(users) => html! {
            @for user in users {
                div.user-item.active[selected == Some(user.id)] data-user-id=(user.id) {
                    div.user-item-name { (display_name(user.first_name.as_deref(), USER_FALLBACK)) }
                    div.user-item-id { "ID: " (user.id) " | Telegram: " (user.telegram_id) }
                }
            }
        },
    }
}

pub fn selected_user_label(state: &DashboardState) -> Markup {
    match state.selection() {
        Some(selection) => PreEscaped(escape_html(&selection.header_label())),
        None => PreEscaped(SELECT_USER.to_string()),
    }
}

pub fn wheel_list(wheels: &Panel<Vec<Wheel>>, pattern: &str) -> Markup {
    match wheels {
        Panel::Idle => html! {},
        Panel::Loading => placeholder("loading", LOADING),
        Panel::Empty => placeholder("empty-state", NO_WHEELS),
        Panel::Failed(message) => placeholder("empty-state", message),
        Panel::Ready(wheels) => html! {
            @for wheel in wheels {
                div.wheel-item data-wheel-id=[wheel.id] {
                    div.wheel-header {
                        div.wheel-name { (wheel.name) }
                        div.wheel-date { (format_timestamp(wheel.created_at.as_deref(), pattern)) }
                    }
                    @if wheel.has_analysis {
                        span.wheel-badge { (HAS_ANALYSIS) }
                    }
                }
            }
        },
    }
}

/// The three summary cards. Each names the drill-down it opens.
pub fn statistics_cards(statistics: &Panel<StatisticsSummary>) -> Markup {
    match statistics {
        Panel::Idle => html! {},
        Panel::Loading => placeholder("loading", LOADING),
        // A summary always has all three counters.
        Panel::Empty => html! {},
        Panel::Failed(message) => placeholder("empty-state", message),
        Panel::Ready(summary) => html! {
            @for kind in DrillDown::ALL {
                div.stat-card.clickable data-drill-down=(kind) {
                    h3 { (kind.card_title()) }
                    div.value { (kind.value(summary)) }
                    div.description { (kind.card_description()) }
                    div.click-hint { (CLICK_HINT) }
                }
            }
        },
    }
}

/// Content of `modal-data`. Empty while the modal is loading.
pub fn detail_table(kind: DrillDown, content: &Panel<DetailRows>, pattern: &str) -> Markup {
    match content {
        Panel::Idle | Panel::Loading => html! {},
        Panel::Empty => placeholder("empty-state", kind.empty_message()),
        Panel::Failed(message) => placeholder("empty-state", message),
        Panel::Ready(rows) => detail_rows(rows, pattern),
    }
}

fn detail_rows(rows: &DetailRows, pattern: &str) -> Markup {
    match rows {
        DetailRows::NewUsers(rows) => html! {
            table.detail-table {
                thead { tr { th { "ID" } th { "Telegram ID" } th { "First name" } th { "Username" } th { "Registered" } } }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.id) }
                            td { (row.telegram_id) }
                            td { (display_name(row.first_name.as_deref(), DASH)) }
                            td { (display_username(row.username.as_deref())) }
                            td { (format_timestamp(row.created_at.as_deref(), pattern)) }
                        }
                    }
                }
            }
        },
        DetailRows::WheelCreators(rows) => html! {
            table.detail-table {
                thead { tr { th { "ID" } th { "Telegram ID" } th { "First name" } th { "Username" } th { "Wheels created" } th { "Last wheel" } } }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.id) }
                            td { (row.telegram_id) }
                            td { (display_name(row.first_name.as_deref(), DASH)) }
                            td { (display_username(row.username.as_deref())) }
                            td { strong { (row.wheels_count) } }
                            td { (format_timestamp(row.last_wheel_date.as_deref(), pattern)) }
                        }
                    }
                }
            }
        },
        DetailRows::InactiveUsers(rows) => html! {
            table.detail-table {
                thead { tr { th { "ID" } th { "Telegram ID" } th { "First name" } th { "Username" } th { "Last wheel" } } }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.id) }
                            td { (row.telegram_id) }
                            td { (display_name(row.first_name.as_deref(), DASH)) }
                            td { (display_username(row.username.as_deref())) }
                            td { (format_timestamp(row.last_wheel_date.as_deref(), pattern)) }
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::DEFAULT_DATE_FORMAT;
    use crate::dashboard::Tab;
    use crate::models::NewUserRow;

    fn user(id: i64, first_name: Option<&str>) -> User {
        User {
            id,
            telegram_id: 7000 + id,
            first_name: first_name.map(str::to_string),
            username: Some("handle".to_string()),
            created_at: Some("2024-05-06T07:08:09".to_string()),
            last_action_date: None,
        }
    }

    fn state() -> DashboardState {
        DashboardState::new(DEFAULT_DATE_FORMAT.to_string())
    }

    #[test]
    fn test_user_rows() {
        let html = users_rows(&Panel::from_list(vec![user(1, Some("Anna"))]), DEFAULT_DATE_FORMAT)
            .into_string();
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("<td>7001</td>"));
        assert!(html.contains("@handle"));
        assert!(html.contains("06.05.2024, 07:08"));
        assert!(html.contains("No actions"));
    }

    #[test]
    fn test_empty_users_shows_placeholder_only() {
        let html = users_rows(&Panel::Empty, DEFAULT_DATE_FORMAT).into_string();
        assert!(html.contains("No users found"));
        assert!(html.contains("colspan=\"6\""));
        assert_eq!(html.matches("<td>").count(), 0);
    }

    #[test]
    fn test_error_text_is_verbatim() {
        let failed = Panel::Failed("Error: database is locked".to_string());
        let html = users_rows(&failed, DEFAULT_DATE_FORMAT).into_string();
        assert!(html.contains("Error: database is locked"));
        assert_eq!(html.matches("<td>").count(), 0);
    }

    #[test]
    fn test_names_are_escaped() {
        let users = Panel::from_list(vec![user(1, Some("<script>alert(1)</script>"))]);
        let html = users_rows(&users, DEFAULT_DATE_FORMAT).into_string();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));

        let wheels = Panel::from_list(vec![Wheel {
            id: None,
            name: "<b>bold</b>".to_string(),
            created_at: None,
            has_analysis: true,
        }]);
        let html = wheel_list(&wheels, DEFAULT_DATE_FORMAT).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("✓ Has analysis"));
        assert!(html.contains("—"));
    }

    #[test]
    fn test_server_error_is_escaped() {
        let failed: Panel<Vec<Wheel>> = Panel::Failed("Error: <oops>".to_string());
        let html = wheel_list(&failed, DEFAULT_DATE_FORMAT).into_string();
        assert!(html.contains("Error: &lt;oops&gt;"));
    }

    #[test]
    fn test_selected_owner_is_the_only_active_item() {
        let mut state = state();
        state.resolve_owners(vec![user(1, Some("Anna")), user(2, None)]);
        state.select_owner(2);

        let html = owner_list(&state).into_string();
        assert_eq!(html.matches("user-item active").count(), 1);
        assert!(html.contains("class=\"user-item active\""));
        assert!(html.contains("data-user-id=\"2\""));
        assert_eq!(
            selected_user_label(&state).into_string(),
            "Wheels of user: User"
        );
    }

    #[test]
    fn test_empty_owner_list_shows_placeholder() {
        let mut state = state();
        state.owners = Panel::Empty;

        let html = owner_list(&state).into_string();
        assert!(html.contains("No users found"));
        assert!(!html.contains("user-item"));
    }

    #[test]
    fn test_failed_owner_list_shows_error() {
        let mut state = state();
        state.owners = Panel::Failed("Loading failed: connection refused".to_string());

        let html = owner_list(&state).into_string();
        assert!(html.contains("Loading failed: connection refused"));
        assert!(!html.contains("user-item"));
        assert_eq!(selected_user_label(&state).into_string(), SELECT_USER);
    }

    #[test]
    fn test_statistics_cards() {
        let summary = Panel::Ready(StatisticsSummary {
            new_users: 5,
            wheels_created: 3,
            inactive_users: 2,
        });
        let html = statistics_cards(&summary).into_string();
        assert_eq!(html.matches("stat-card clickable").count(), 3);
        assert!(html.contains("<div class=\"value\">5</div>"));
        assert!(html.contains("<div class=\"value\">3</div>"));
        assert!(html.contains("<div class=\"value\">2</div>"));
        assert!(html.contains("data-drill-down=\"new-users\""));
        assert!(html.contains("data-drill-down=\"wheel-creators\""));
        assert!(html.contains("data-drill-down=\"inactive-users\""));
    }

    #[test]
    fn test_modal_loading_then_empty() {
        let mut state = state();
        state.active_tab = Tab::Statistics;
        state.open_modal(DrillDown::NewUsers);

        let document = render_document(&state);
        assert!(document.modal_visible);
        assert!(document.modal_loading_visible);
        assert_eq!(document.inner_html(MountPoint::ModalData), "");
        assert_eq!(
            document.inner_html(MountPoint::ModalTitle),
            "New users in the last 30 days"
        );

        state.resolve_details(DetailRows::NewUsers(Vec::new()));
        let document = render_document(&state);
        assert!(!document.modal_loading_visible);
        let data = document.inner_html(MountPoint::ModalData);
        assert!(data.contains("No new users found"));
        assert!(!data.contains("<table"));
    }

    #[test]
    fn test_detail_table_rows() {
        let rows = Panel::Ready(DetailRows::NewUsers(vec![NewUserRow {
            id: 4,
            telegram_id: 44,
            first_name: None,
            username: None,
            created_at: None,
        }]));
        let html = detail_table(DrillDown::NewUsers, &rows, DEFAULT_DATE_FORMAT).into_string();
        assert!(html.contains("detail-table"));
        assert!(html.contains("<td>44</td>"));
        assert_eq!(html.matches("<td>—</td>").count(), 3);
    }

    #[test]
    fn test_closed_modal_is_hidden() {
        let mut state = state();
        state.open_modal(DrillDown::InactiveUsers);
        state.close_modal();
        let page = render_document(&state).to_page();
        assert!(!page.contains("display: block"));
    }
}
