//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from load results.
//! Each finished load fully replaces the previous content of its container.

use super::ledger::Slot;
use super::state::{DashboardState, DrillDown, Panel, Selection};

use crate::consts::cli_consts::text::USER_FALLBACK;
use crate::format::display_name;
use crate::models::{DetailRows, StatisticsSummary, User, Wheel};

impl DashboardState {
    /// Show the loading placeholder in `slot`.
    pub fn begin_loading(&mut self, slot: Slot) {
        match slot {
            Slot::UsersTable => self.users = Panel::Loading,
            Slot::OwnerList => self.owners = Panel::Loading,
            Slot::WheelList => self.wheels = Panel::Loading,
            Slot::Statistics => self.statistics = Panel::Loading,
            Slot::Modal => self.modal.content = Panel::Loading,
        }
    }

    /// Replace the content of `slot` with an error message.
    pub fn fail(&mut self, slot: Slot, message: String) {
        match slot {
            Slot::UsersTable => self.users = Panel::Failed(message),
            Slot::OwnerList => self.owners = Panel::Failed(message),
            Slot::WheelList => self.wheels = Panel::Failed(message),
            Slot::Statistics => self.statistics = Panel::Failed(message),
            Slot::Modal => self.modal.content = Panel::Failed(message),
        }
    }

    pub fn resolve_users(&mut self, users: Vec<User>) {
        self.users = Panel::from_list(users);
    }

    /// Store the wheels tab user list.
    ///
    /// Returns the user that should be selected next: the current selection
    /// if it is still listed, otherwise the first user. `None` for an empty
    /// list.
    pub fn resolve_owners(&mut self, users: Vec<User>) -> Option<i64> {
        let current = self.selection().map(|selection| selection.user_id);
        let next = match current {
            Some(id) if users.iter().any(|user| user.id == id) => Some(id),
            _ => users.first().map(|user| user.id),
        };
        self.owners = Panel::from_list(users);
        next
    }

    /// Mark `user_id` as the selected user.
    ///
    /// The header label uses the user's first name from the current list,
    /// falling back to a generic name when the user is not listed or has no
    /// first name.
    pub fn select_owner(&mut self, user_id: i64) {
        let name = self
            .owners
            .items()
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| display_name(user.first_name.as_deref(), USER_FALLBACK))
            .unwrap_or(USER_FALLBACK)
            .to_string();
        self.set_selection(Selection { user_id, name });
    }

    pub fn resolve_wheels(&mut self, wheels: Vec<Wheel>) {
        self.wheels = Panel::from_list(wheels);
    }

    pub fn resolve_statistics(&mut self, summary: StatisticsSummary) {
        self.statistics = Panel::Ready(summary);
    }

    /// Open the modal for `kind`, clearing whatever it showed before.
    pub fn open_modal(&mut self, kind: DrillDown) {
        self.modal.open = true;
        self.modal.drill_down = Some(kind);
        self.modal.content = Panel::Loading;
    }

    pub fn close_modal(&mut self) {
        self.modal.open = false;
    }

    pub fn resolve_details(&mut self, rows: DetailRows) {
        self.modal.content = if rows.is_empty() {
            Panel::Empty
        } else {
            Panel::Ready(rows)
        };
    }
}
