//! Dashboard state management
//!
//! Contains the view-model state the controller owns and both renderers read.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::text::{
    NO_INACTIVE_USERS, NO_NEW_USERS, NO_WHEEL_CREATORS, SELECTED_USER_PREFIX,
};
use crate::events::Event;
use crate::models::{DetailRows, StatisticsSummary, User, Wheel};

use std::collections::VecDeque;

/// The dashboard's tabs, in display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Users,
    Wheels,
    Statistics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Users, Tab::Wheels, Tab::Statistics];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Users => "Users",
            Tab::Wheels => "Wheels",
            Tab::Statistics => "Statistics",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Users => 0,
            Tab::Wheels => 1,
            Tab::Statistics => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// The statistics drill-downs, one per summary card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DrillDown {
    NewUsers,
    WheelCreators,
    InactiveUsers,
}

impl DrillDown {
    pub const ALL: [DrillDown; 3] = [
        DrillDown::NewUsers,
        DrillDown::WheelCreators,
        DrillDown::InactiveUsers,
    ];

    /// Modal title.
    pub fn title(&self) -> &'static str {
        match self {
            DrillDown::NewUsers => "New users in the last 30 days",
            DrillDown::WheelCreators => "Users who created wheels in the last 30 days",
            DrillDown::InactiveUsers => "Inactive users",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            DrillDown::NewUsers => NO_NEW_USERS,
            DrillDown::WheelCreators => NO_WHEEL_CREATORS,
            DrillDown::InactiveUsers => NO_INACTIVE_USERS,
        }
    }

    pub fn card_title(&self) -> &'static str {
        match self {
            DrillDown::NewUsers => "New users",
            DrillDown::WheelCreators => "Wheels created",
            DrillDown::InactiveUsers => "Inactive users",
        }
    }

    pub fn card_description(&self) -> &'static str {
        match self {
            DrillDown::NewUsers => "Joined in the last 30 days",
            DrillDown::WheelCreators => "In the last 30 days",
            DrillDown::InactiveUsers => "Active last month but not this month",
        }
    }

    /// The summary counter this card shows.
    pub fn value(&self, summary: &StatisticsSummary) -> u64 {
        match self {
            DrillDown::NewUsers => summary.new_users,
            DrillDown::WheelCreators => summary.wheels_created,
            DrillDown::InactiveUsers => summary.inactive_users,
        }
    }

    fn index(&self) -> usize {
        match self {
            DrillDown::NewUsers => 0,
            DrillDown::WheelCreators => 1,
            DrillDown::InactiveUsers => 2,
        }
    }

    /// Neighbouring card, clamped at both ends.
    pub fn shifted(&self, delta: isize) -> DrillDown {
        let last = DrillDown::ALL.len() as isize - 1;
        let index = (self.index() as isize + delta).clamp(0, last);
        DrillDown::ALL[index as usize]
    }
}

/// Content of one container: `Idle → Loading → {Ready, Empty, Failed}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel<T> {
    /// Never loaded.
    Idle,
    Loading,
    /// Loaded with at least one item.
    Ready(T),
    /// Loaded, nothing to show.
    Empty,
    /// Message shown in place of the content.
    Failed(String),
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Panel::Idle
    }
}

impl<T> Panel<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }
}

impl<T> Panel<Vec<T>> {
    /// `Empty` for an empty list, `Ready` otherwise.
    pub fn from_list(items: Vec<T>) -> Self {
        if items.is_empty() {
            Panel::Empty
        } else {
            Panel::Ready(items)
        }
    }

    /// Items currently shown; none unless the list loaded.
    pub fn items(&self) -> &[T] {
        match self {
            Panel::Ready(items) => items,
            _ => &[],
        }
    }
}

/// The user whose wheels the wheels tab shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub user_id: i64,
    /// Display name as shown in the header label.
    pub name: String,
}

impl Selection {
    pub fn header_label(&self) -> String {
        format!("{}{}", SELECTED_USER_PREFIX, self.name)
    }
}

/// The shared drill-down overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub open: bool,
    pub drill_down: Option<DrillDown>,
    pub content: Panel<DetailRows>,
}

impl ModalState {
    pub fn title(&self) -> &'static str {
        self.drill_down.map(|kind| kind.title()).unwrap_or_default()
    }
}

/// What a click inside the open modal landed on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ModalTarget {
    /// The dimmed background around the content panel.
    Overlay,
    /// The content panel or anything inside it.
    Content,
}

/// View-model state of the whole dashboard.
#[derive(Debug)]
pub struct DashboardState {
    /// The tab currently shown. Exactly one tab is active at a time.
    pub active_tab: Tab,
    /// User table of the users tab.
    pub users: Panel<Vec<User>>,
    /// User list of the wheels tab.
    pub owners: Panel<Vec<User>>,
    /// Wheels of the selected user.
    pub wheels: Panel<Vec<Wheel>>,
    /// Summary counters of the statistics tab.
    pub statistics: Panel<StatisticsSummary>,
    /// Card with keyboard focus on the statistics tab.
    pub focused_card: DrillDown,
    pub modal: ModalState,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<Event>,
    /// chrono pattern used for every timestamp.
    pub date_format: String,

    /// Survives tab switches, reset only on restart.
    selection: Option<Selection>,
}

impl DashboardState {
    pub fn new(date_format: String) -> Self {
        Self {
            active_tab: Tab::Users,
            users: Panel::Idle,
            owners: Panel::Idle,
            wheels: Panel::Idle,
            statistics: Panel::Idle,
            focused_card: DrillDown::NewUsers,
            modal: ModalState::default(),
            activity_logs: VecDeque::new(),
            date_format,
            selection: None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    /// Position of the selected user in the wheels tab list, if shown there.
    pub fn selected_owner_index(&self) -> Option<usize> {
        let selected = self.selection.as_ref()?.user_id;
        self.owners
            .items()
            .iter()
            .position(|user| user.id == selected)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Users.next(), Tab::Wheels);
        assert_eq!(Tab::Statistics.next(), Tab::Users);
        assert_eq!(Tab::Users.previous(), Tab::Statistics);
    }

    #[test]
    fn test_tab_and_drill_down_names() {
        assert_eq!(Tab::from_str("statistics").unwrap(), Tab::Statistics);
        assert_eq!(Tab::Wheels.to_string(), "wheels");
        assert_eq!(
            DrillDown::from_str("inactive-users").unwrap(),
            DrillDown::InactiveUsers
        );
        assert_eq!(DrillDown::WheelCreators.to_string(), "wheel-creators");
    }

    #[test]
    fn test_card_focus_is_clamped() {
        assert_eq!(DrillDown::NewUsers.shifted(-1), DrillDown::NewUsers);
        assert_eq!(DrillDown::NewUsers.shifted(1), DrillDown::WheelCreators);
        assert_eq!(DrillDown::WheelCreators.shifted(5), DrillDown::InactiveUsers);
    }

    #[test]
    fn test_panel_from_list() {
        assert_eq!(Panel::<Vec<u8>>::from_list(Vec::new()), Panel::Empty);
        assert_eq!(Panel::from_list(vec![1]), Panel::Ready(vec![1]));
        assert!(Panel::<Vec<u8>>::Failed("x".into()).items().is_empty());
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = DashboardState::new("%d.%m.%Y".to_string());
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::success(format!("event {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}
