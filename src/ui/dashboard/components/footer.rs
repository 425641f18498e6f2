//! Dashboard footer component
//!
//! Renders the key bindings of the active tab

use crate::dashboard::{DashboardState, Tab};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn footer_text(state: &DashboardState) -> &'static str {
    if state.modal.open {
        return "[Esc] Close | click outside to close";
    }
    match state.active_tab {
        Tab::Users => "[1-3/Tab] Switch tab | [R] Reload | [Q] Quit",
        Tab::Wheels => "[↑↓] Select user | [1-3/Tab] Switch tab | [R] Reload | [Q] Quit",
        Tab::Statistics => {
            "[←→] Focus card | [Enter] Details | [N/W/I] Open list | [R] Reload | [Q] Quit"
        }
    }
}

/// Render enhanced footer.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let footer = Paragraph::new(footer_text(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
