//! Wheels tab component
//!
//! Renders the user list with the selected user highlighted next to that
//! user's wheels

use super::super::utils::panel_placeholder;
use crate::consts::cli_consts::text::{
    HAS_ANALYSIS, NO_USERS, NO_WHEELS, SELECT_USER, USER_FALLBACK,
};
use crate::dashboard::DashboardState;
use crate::format::{display_name, format_timestamp};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap,
};

pub fn render_wheels_tab(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_owner_list(f, chunks[0], state);
    render_wheel_list(f, chunks[1], state);
}

fn render_owner_list(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("USERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if let Some(placeholder) = panel_placeholder(&state.owners, NO_USERS) {
        let paragraph = Paragraph::new(placeholder)
            .block(block.padding(Padding::horizontal(1)))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .owners
        .items()
        .iter()
        .map(|user| {
            ListItem::new(vec![
                Line::from(display_name(user.first_name.as_deref(), USER_FALLBACK).to_string()),
                Line::styled(
                    format!("ID: {} | Telegram: {}", user.id, user.telegram_id),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▶ ")
        .highlight_style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default().with_selected(state.selected_owner_index());
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_wheel_list(f: &mut Frame, area: Rect, state: &DashboardState) {
    let title = state
        .selection()
        .map(|selection| selection.header_label())
        .unwrap_or_else(|| SELECT_USER.to_string());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let lines = match panel_placeholder(&state.wheels, NO_WHEELS) {
        Some(placeholder) => vec![placeholder],
        None => state
            .wheels
            .items()
            .iter()
            .flat_map(|wheel| {
                let mut header = vec![
                    Span::styled(
                        wheel.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", format_timestamp(wheel.created_at.as_deref(), &state.date_format)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if wheel.has_analysis {
                    header.push(Span::styled(
                        format!("  {}", HAS_ANALYSIS),
                        Style::default().fg(Color::LightGreen),
                    ));
                }
                [Line::from(header), Line::from("")]
            })
            .collect(),
    };

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
