//! Snapshot mode execution
//!
//! Drives the controller without a terminal and renders the resulting HTML
//! document once every request has settled.

use super::{
    SessionData,
    messages::{SessionMessage, print_session_starting},
};
use crate::dashboard::{Controller, DrillDown, Tab};
use crate::events::LoadEvent;
use crate::render::render_document;
use log::{debug, warn};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// What the snapshot should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub tab: Tab,
    /// User to select on the wheels tab.
    pub user_id: Option<i64>,
    /// Drill-down to open after the tab loaded.
    pub drill_down: Option<DrillDown>,
}

impl SnapshotOptions {
    /// Options for the given flags. Without an explicit tab, a user id
    /// implies the wheels tab and a drill-down the statistics tab.
    pub fn new(tab: Option<Tab>, user_id: Option<i64>, drill_down: Option<DrillDown>) -> Self {
        let tab = tab.unwrap_or(match (user_id, drill_down) {
            (Some(_), _) => Tab::Wheels,
            (None, Some(_)) => Tab::Statistics,
            (None, None) => Tab::Users,
        });
        Self {
            tab,
            user_id,
            drill_down,
        }
    }
}

/// Apply load events until no request is outstanding.
async fn settle(controller: &mut Controller, receiver: &mut mpsc::Receiver<LoadEvent>) {
    while controller.in_flight() > 0 {
        match receiver.recv().await {
            Some(event) => controller.apply(event),
            None => {
                warn!("Event channel closed with requests outstanding");
                break;
            }
        }
    }
}

/// Load the requested view and render the full page.
pub async fn render_snapshot(session: SessionData, options: &SnapshotOptions) -> String {
    let SessionData {
        mut controller,
        mut event_receiver,
        ..
    } = session;

    controller.activate_tab(options.tab);
    settle(&mut controller, &mut event_receiver).await;

    if let Some(user_id) = options.user_id {
        debug!("Selecting user {}", user_id);
        controller.select_user(user_id);
        settle(&mut controller, &mut event_receiver).await;
    }

    if let Some(kind) = options.drill_down {
        debug!("Opening {} drill-down", kind);
        controller.open_drill_down(kind);
        settle(&mut controller, &mut event_receiver).await;
    }

    render_document(controller.state()).to_page()
}

/// Runs the application in snapshot mode
///
/// # Arguments
/// * `session` - Session data from setup
/// * `options` - View to render
/// * `output` - File to write the page to; stdout when `None`
pub async fn run_snapshot_mode(
    session: SessionData,
    options: SnapshotOptions,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("snapshot", &session.api_url);

    let page = render_snapshot(session, &options).await;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, page)?;
            SessionMessage::success(format!("Snapshot written to {}", path.display())).print();
        }
        None => println!("{}", page),
    }
    Ok(())
}
