//! Users tab component
//!
//! Renders the user table

use super::super::utils::panel_placeholder;
use crate::consts::cli_consts::text::{DASH, NO_USERS};
use crate::dashboard::DashboardState;
use crate::format::{display_last_action, display_name, display_username, format_timestamp};

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Row, Table};

pub fn render_users_tab(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("USERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if let Some(placeholder) = panel_placeholder(&state.users, NO_USERS) {
        f.render_widget(Paragraph::new(placeholder).block(block), area);
        return;
    }

    let pattern = state.date_format.as_str();
    let rows = state.users.items().iter().map(|user| {
        Row::new(vec![
            user.id.to_string(),
            user.telegram_id.to_string(),
            display_name(user.first_name.as_deref(), DASH).to_string(),
            display_username(user.username.as_deref()),
            format_timestamp(user.created_at.as_deref(), pattern),
            display_last_action(user.last_action_date.as_deref(), pattern),
        ])
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Length(18),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec![
                "ID",
                "Telegram ID",
                "First name",
                "Username",
                "Registered",
                "Last action",
            ])
            .style(
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(block);
    f.render_widget(table, area);
}
