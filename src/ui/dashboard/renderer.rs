//! Dashboard main renderer

use super::components::{footer, header, logs, modal, statistics, users, wheels};
use crate::dashboard::{DashboardState, Tab};
use crate::ui::UIConfig;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState, config: &UIConfig) {
    if config.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state, config);

    match state.active_tab {
        Tab::Users => users::render_users_tab(f, main_chunks[1], state),
        Tab::Wheels => wheels::render_wheels_tab(f, main_chunks[1], state),
        Tab::Statistics => statistics::render_statistics_tab(f, main_chunks[1], state),
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);

    if state.modal.open {
        let area = f.area();
        modal::render_modal(f, area, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::DEFAULT_DATE_FORMAT;
    use crate::dashboard::DrillDown;
    use crate::models::{StatisticsSummary, User};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let config = UIConfig::new(false, "http://localhost:3150".to_string());
        terminal
            .draw(|f| render_dashboard(f, state, &config))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_users_tab_shows_rows() {
        let mut state = DashboardState::new(DEFAULT_DATE_FORMAT.to_string());
        state.resolve_users(vec![User {
            id: 1,
            telegram_id: 424242,
            first_name: Some("Anna".to_string()),
            username: Some("anna".to_string()),
            created_at: None,
            last_action_date: None,
        }]);
        let screen = draw(&state);
        assert!(screen.contains("424242"));
        assert!(screen.contains("@anna"));
        assert!(screen.contains("No actions"));
    }

    #[test]
    fn test_statistics_cards_and_modal() {
        let mut state = DashboardState::new(DEFAULT_DATE_FORMAT.to_string());
        state.active_tab = Tab::Statistics;
        state.resolve_statistics(StatisticsSummary {
            new_users: 5,
            wheels_created: 3,
            inactive_users: 2,
        });
        let screen = draw(&state);
        assert!(screen.contains("New users"));
        assert!(screen.contains("Wheels created"));

        state.open_modal(DrillDown::InactiveUsers);
        let screen = draw(&state);
        assert!(screen.contains("Inactive users"));
        assert!(screen.contains("Loading..."));
    }
}
