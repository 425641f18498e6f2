//! Dashboard header component
//!
//! Renders the title and the tab bar

use crate::dashboard::{DashboardState, Tab};
use crate::ui::UIConfig;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

/// Render the title line and the tab bar with the active tab highlighted.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState, config: &UIConfig) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!(
        "WHEEL OF LIFE ADMIN v{}  ·  {}",
        version, config.api_url
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    f.render_widget(tabs, header_chunks[1]);
}
