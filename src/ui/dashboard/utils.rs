//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consts::cli_consts::text::LOADING;
use crate::dashboard::Panel;
use crate::events::EventType;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;

/// Get a ratatui color for an activity log entry based on its type
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::LightRed,
        EventType::Refresh => Color::Gray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Text shown instead of a panel's content, or `None` once it has loaded
/// items.
pub fn panel_placeholder<T>(panel: &Panel<T>, empty_text: &str) -> Option<Line<'static>> {
    match panel {
        Panel::Idle => Some(Line::from("")),
        Panel::Loading => Some(Line::styled(LOADING, Style::default().fg(Color::Gray))),
        Panel::Empty => Some(Line::styled(
            empty_text.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Panel::Failed(message) => Some(Line::styled(
            message.clone(),
            Style::default().fg(Color::LightRed),
        )),
        Panel::Ready(_) => None,
    }
}

/// Area of the drill-down modal's content panel within `area`.
///
/// Shared by the renderer and the mouse hit test so both agree on where the
/// overlay ends.
pub fn modal_area(area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(15),
        Constraint::Percentage(70),
        Constraint::Percentage(15),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .areas(middle);
    center
}
