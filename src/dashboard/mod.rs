//! Dashboard view-model
//!
//! State, request bookkeeping and the controller shared by the terminal
//! dashboard and the HTML snapshot.

pub mod controller;
pub mod ledger;
pub mod state;
mod updaters;

pub use controller::Controller;
pub use state::{DashboardState, DrillDown, ModalTarget, Panel, Tab};
