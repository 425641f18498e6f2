//! Dashboard controller
//!
//! Owns the dashboard state and turns user intents (switch tab, pick a
//! user, open a drill-down) into loads. Each load runs as its own tokio task
//! and reports back through an mpsc channel; [`Controller::apply`] folds the
//! result into the state. Responses superseded by a newer request for the
//! same container are dropped.

use super::ledger::{RequestLedger, Slot};
use super::state::{DashboardState, DrillDown, ModalTarget, Tab};

use crate::api::AdminApi;
use crate::events::{Event, Fetch, LoadEvent, Payload};
use crate::logging::LogLevel;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct Controller {
    state: DashboardState,
    api: Arc<dyn AdminApi>,
    ledger: RequestLedger,
    sender: mpsc::Sender<LoadEvent>,
}

impl Controller {
    pub fn new(
        api: Arc<dyn AdminApi>,
        sender: mpsc::Sender<LoadEvent>,
        date_format: String,
    ) -> Self {
        Self {
            state: DashboardState::new(date_format),
            api,
            ledger: RequestLedger::new(),
            sender,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Requests issued and not yet answered, stale ones included.
    pub fn in_flight(&self) -> usize {
        self.ledger.in_flight()
    }

    /// Show the default tab and load its data.
    pub fn start(&mut self) {
        self.activate_tab(Tab::Users);
    }

    /// Make `tab` the only active tab and load its data once.
    pub fn activate_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
        match tab {
            Tab::Users => self.issue(Fetch::Users),
            Tab::Wheels => self.issue(Fetch::Owners),
            Tab::Statistics => self.issue(Fetch::Statistics),
        }
    }

    /// Activate the current tab again, reloading it.
    pub fn reload(&mut self) {
        self.activate_tab(self.state.active_tab);
    }

    /// Select a user on the wheels tab and load their wheels.
    pub fn select_user(&mut self, user_id: i64) {
        self.state.select_owner(user_id);
        self.issue(Fetch::Wheels(user_id));
    }

    /// Move the selection up or down the wheels tab user list.
    pub fn move_selection(&mut self, delta: isize) {
        let users = self.state.owners.items();
        if users.is_empty() {
            return;
        }
        let target = match self.state.selected_owner_index() {
            Some(index) => {
                (index as isize + delta).clamp(0, users.len() as isize - 1) as usize
            }
            None => 0,
        };
        if Some(target) == self.state.selected_owner_index() {
            return;
        }
        let user_id = users[target].id;
        self.select_user(user_id);
    }

    /// Move the keyboard focus between statistics cards.
    pub fn focus_card(&mut self, delta: isize) {
        self.state.focused_card = self.state.focused_card.shifted(delta);
    }

    pub fn open_focused_drill_down(&mut self) {
        if self.state.statistics.ready().is_some() {
            self.open_drill_down(self.state.focused_card);
        }
    }

    /// Open the shared modal for `kind` and load its table.
    pub fn open_drill_down(&mut self, kind: DrillDown) {
        self.state.focused_card = kind;
        self.state.open_modal(kind);
        self.issue(Fetch::Details(kind));
    }

    pub fn close_modal(&mut self) {
        if self.state.modal.open {
            self.state.close_modal();
            self.ledger.invalidate(Slot::Modal);
        }
    }

    /// Handle a click while the modal is open. Only a click on the overlay
    /// itself closes it.
    pub fn click_modal(&mut self, target: ModalTarget) {
        if target == ModalTarget::Overlay {
            self.close_modal();
        }
    }

    /// Fold a finished load into the state.
    pub fn apply(&mut self, event: LoadEvent) {
        let LoadEvent {
            ticket,
            fetch,
            outcome,
        } = event;

        if !self.ledger.settle(ticket) {
            debug!(
                "Dropping stale response #{} for {} ({})",
                ticket.id, ticket.slot, fetch
            );
            return;
        }

        match outcome {
            Ok(payload) => {
                self.state
                    .add_to_activity_log(Event::success(format!("Loaded {}", fetch)));
                self.apply_payload(payload);
            }
            Err(error) => {
                warn!("Failed to load {}: {}", fetch, error);
                let level = if error.is_application() {
                    LogLevel::Warn
                } else {
                    LogLevel::Error
                };
                let message = error.user_message();
                self.state
                    .add_to_activity_log(Event::error(format!("{}: {}", fetch, message), level));
                self.state.fail(ticket.slot, message);
            }
        }
    }

    fn apply_payload(&mut self, payload: Payload) {
        match payload {
            Payload::Users(users) => self.state.resolve_users(users),
            Payload::Owners(users) => {
                if let Some(user_id) = self.state.resolve_owners(users) {
                    self.select_user(user_id);
                }
            }
            Payload::Wheels { user_id, wheels } => {
                debug!("User {} has {} wheels", user_id, wheels.len());
                self.state.resolve_wheels(wheels)
            }
            Payload::Statistics(summary) => self.state.resolve_statistics(summary),
            Payload::Details(rows) => self.state.resolve_details(rows),
        }
    }

    /// Put `fetch`'s container into the loading state and start the request.
    fn issue(&mut self, fetch: Fetch) {
        let ticket = self.ledger.issue(fetch.slot());
        self.state.begin_loading(ticket.slot);
        self.state
            .add_to_activity_log(Event::refresh(format!("Loading {}", fetch)));
        info!("Loading {} (request #{})", fetch, ticket.id);

        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let outcome = fetch.run(api.as_ref()).await;
            let event = LoadEvent {
                ticket,
                fetch,
                outcome,
            };
            if sender.send(event).await.is_err() {
                debug!("Dashboard closed before {} finished loading", fetch);
            }
        });
    }
}
