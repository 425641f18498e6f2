//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::UI_POLL_INTERVAL_MS;
use crate::dashboard::{Controller, DashboardState, DrillDown, ModalTarget, Tab};
use crate::events::LoadEvent;
use crate::ui::dashboard::{modal_area, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use log::debug;
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Backend shown in the header.
    pub api_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String) -> Self {
        Self {
            with_background_color,
            api_url,
        }
    }
}

/// What a key press asks the dashboard to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Quit,
    ShowTab(Tab),
    NextTab,
    PreviousTab,
    Reload,
    MoveSelection(isize),
    FocusCard(isize),
    OpenFocused,
    Open(DrillDown),
    CloseModal,
}

/// Map a key press to an action given the current state.
///
/// While the modal is open only closing and quitting are accepted.
pub fn action_for_key(code: KeyCode, state: &DashboardState) -> Option<Action> {
    if state.modal.open {
        return match code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::CloseModal),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('1') => Some(Action::ShowTab(Tab::Users)),
        KeyCode::Char('2') => Some(Action::ShowTab(Tab::Wheels)),
        KeyCode::Char('3') => Some(Action::ShowTab(Tab::Statistics)),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Up if state.active_tab == Tab::Wheels => Some(Action::MoveSelection(-1)),
        KeyCode::Down if state.active_tab == Tab::Wheels => Some(Action::MoveSelection(1)),
        KeyCode::Left if state.active_tab == Tab::Statistics => Some(Action::FocusCard(-1)),
        KeyCode::Right if state.active_tab == Tab::Statistics => Some(Action::FocusCard(1)),
        KeyCode::Enter if state.active_tab == Tab::Statistics => Some(Action::OpenFocused),
        KeyCode::Char('n') if state.active_tab == Tab::Statistics => {
            Some(Action::Open(DrillDown::NewUsers))
        }
        KeyCode::Char('w') if state.active_tab == Tab::Statistics => {
            Some(Action::Open(DrillDown::WheelCreators))
        }
        KeyCode::Char('i') if state.active_tab == Tab::Statistics => {
            Some(Action::Open(DrillDown::InactiveUsers))
        }
        _ => None,
    }
}

/// Whether a click at `position` hit the modal's content or the overlay
/// around it.
pub fn modal_target(area: Rect, position: Position) -> ModalTarget {
    if modal_area(area).contains(position) {
        ModalTarget::Content
    } else {
        ModalTarget::Overlay
    }
}

/// Application state
pub struct App {
    controller: Controller,

    /// Receives finished loads from spawned fetch tasks.
    event_receiver: mpsc::Receiver<LoadEvent>,

    ui_config: UIConfig,

    /// Terminal area of the last frame, for mouse hit tests.
    area: Rect,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: Controller,
        event_receiver: mpsc::Receiver<LoadEvent>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            controller,
            event_receiver,
            ui_config,
            area: Rect::default(),
        }
    }

    /// Apply an action. Returns `false` when the application should exit.
    fn handle_action(&mut self, action: Action) -> bool {
        let active_tab = self.controller.state().active_tab;
        match action {
            Action::Quit => return false,
            Action::ShowTab(tab) => self.controller.activate_tab(tab),
            Action::NextTab => self.controller.activate_tab(active_tab.next()),
            Action::PreviousTab => self.controller.activate_tab(active_tab.previous()),
            Action::Reload => self.controller.reload(),
            Action::MoveSelection(delta) => self.controller.move_selection(delta),
            Action::FocusCard(delta) => self.controller.focus_card(delta),
            Action::OpenFocused => self.controller.open_focused_drill_down(),
            Action::Open(kind) => self.controller.open_drill_down(kind),
            Action::CloseModal => self.controller.close_modal(),
        }
        true
    }
}

/// Runs the application UI in a loop, applying finished loads and handling
/// keyboard and mouse input.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.controller.start();

    loop {
        while let Ok(event) = app.event_receiver.try_recv() {
            app.controller.apply(event);
        }

        let mut area = app.area;
        terminal.draw(|f| {
            area = f.area();
            render_dashboard(f, app.controller.state(), &app.ui_config);
        })?;
        app.area = area;

        if !event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(action) = action_for_key(key.code, app.controller.state()) {
                    debug!("Key {:?} -> {:?}", key.code, action);
                    if !app.handle_action(action) {
                        return Ok(());
                    }
                }
            }
            Event::Mouse(mouse) if app.controller.state().modal.open => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let target = modal_target(app.area, Position::new(mouse.column, mouse.row));
                    app.controller.click_modal(target);
                }
            }
            _ => {}
        }
    }
}
