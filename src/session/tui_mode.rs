//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the interactive terminal dashboard
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
///
/// # Returns
/// * `Ok(())` - The user quit the dashboard
/// * `Err` - Terminal setup or drawing failed
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("dashboard", &session.api_url);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(with_background, session.api_url.clone());
    let app = ui::App::new(session.controller, session.event_receiver, ui_config);

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    print_session_exit_success();
    Ok(())
}
