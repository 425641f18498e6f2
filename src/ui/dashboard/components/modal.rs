//! Drill-down modal component
//!
//! Renders the detail table over a cleared area

use super::super::utils::{modal_area, panel_placeholder};
use crate::consts::cli_consts::text::DASH;
use crate::dashboard::DashboardState;
use crate::format::{display_name, display_username, format_timestamp};
use crate::models::DetailRows;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Row, Table, Wrap};

pub fn render_modal(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(kind) = state.modal.drill_down else {
        return;
    };
    let area = modal_area(area);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(state.modal.title())
        .title_bottom("[Esc] Close")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::LightYellow))
        .padding(Padding::horizontal(1));

    if let Some(placeholder) = panel_placeholder(&state.modal.content, kind.empty_message()) {
        f.render_widget(
            Paragraph::new(placeholder)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }
    let Some(rows) = state.modal.content.ready() else {
        return;
    };

    let pattern = state.date_format.as_str();
    let (header, widths, body): (Vec<&str>, Vec<Constraint>, Vec<Row>) = match rows {
        DetailRows::NewUsers(rows) => (
            vec!["ID", "Telegram ID", "First name", "Username", "Registered"],
            vec![
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(18),
            ],
            rows.iter()
                .map(|row| {
                    Row::new(vec![
                        row.id.to_string(),
                        row.telegram_id.to_string(),
                        display_name(row.first_name.as_deref(), DASH).to_string(),
                        display_username(row.username.as_deref()),
                        format_timestamp(row.created_at.as_deref(), pattern),
                    ])
                })
                .collect(),
        ),
        DetailRows::WheelCreators(rows) => (
            vec![
                "ID",
                "Telegram ID",
                "First name",
                "Username",
                "Wheels created",
                "Last wheel",
            ],
            vec![
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(14),
                Constraint::Length(18),
            ],
            rows.iter()
                .map(|row| {
                    Row::new(vec![
                        row.id.to_string(),
                        row.telegram_id.to_string(),
                        display_name(row.first_name.as_deref(), DASH).to_string(),
                        display_username(row.username.as_deref()),
                        row.wheels_count.to_string(),
                        format_timestamp(row.last_wheel_date.as_deref(), pattern),
                    ])
                })
                .collect(),
        ),
        DetailRows::InactiveUsers(rows) => (
            vec!["ID", "Telegram ID", "First name", "Username", "Last wheel"],
            vec![
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(18),
            ],
            rows.iter()
                .map(|row| {
                    Row::new(vec![
                        row.id.to_string(),
                        row.telegram_id.to_string(),
                        display_name(row.first_name.as_deref(), DASH).to_string(),
                        display_username(row.username.as_deref()),
                        format_timestamp(row.last_wheel_date.as_deref(), pattern),
                    ])
                })
                .collect(),
        ),
    };

    let table = Table::new(body, widths)
        .header(
            Row::new(header).style(
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(block);
    f.render_widget(table, area);
}
