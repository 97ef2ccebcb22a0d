//! Help line rendering
//!
//! This module handles rendering of the key hint line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.focus {
        Focus::TextStyle => " F1: Help | ←/→: Change Style | Tab: Next Field | F5: Calculate | Esc: Quit",
        Focus::Calculate => " F1: Help | Enter: Calculate Stats | Tab: Next Field | Esc: Quit",
        Focus::Name | Focus::Numbers => {
            " F1: Help | Tab: Next Field | F5: Calculate | PgUp/PgDn: Scroll Stats | Esc: Quit"
        }
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
