//! Statistics tab component
//!
//! Renders the three summary cards; the focused card opens on Enter

use super::super::utils::panel_placeholder;
use crate::consts::cli_consts::text::CLICK_HINT;
use crate::dashboard::{DashboardState, DrillDown};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_statistics_tab(f: &mut Frame, area: Rect, state: &DashboardState) {
    if let Some(placeholder) = panel_placeholder(&state.statistics, "") {
        let block = Block::default()
            .title("STATISTICS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1));
        f.render_widget(Paragraph::new(placeholder).block(block), area);
        return;
    }
    let Some(summary) = state.statistics.ready() else {
        return;
    };

    let [cards_area] = Layout::vertical([Constraint::Length(9)]).areas(area);
    let chunks = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);

    for (kind, chunk) in DrillDown::ALL.iter().zip(chunks.iter()) {
        let focused = *kind == state.focused_card;
        let border_color = if focused { Color::LightYellow } else { Color::Cyan };

        let card = Paragraph::new(vec![
            Line::styled(
                kind.value(summary).to_string(),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(kind.card_description()),
            Line::styled(CLICK_HINT, Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(kind.card_title())
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(border_color))
                .padding(Padding::uniform(1)),
        );
        f.render_widget(card, *chunk);
    }
}
