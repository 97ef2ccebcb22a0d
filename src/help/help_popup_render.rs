//! Help popup rendering
//!
//! This module handles rendering of the help popup modal with keyboard shortcuts.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::widgets::popup;

pub const HELP_KEY_COLUMN: usize = 16;
pub const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

/// Width needed to show every entry without wrapping, borders included
pub fn popup_width() -> u16 {
    let widest_entry = HELP_ENTRIES
        .iter()
        .map(|(_, desc)| 2 + HELP_KEY_COLUMN + desc.width())
        .chain(std::iter::once(HELP_FOOTER.width() + 2))
        .max()
        .unwrap_or(0);

    (widest_entry + 4) as u16
}

/// Pad `key` with spaces to the key column, by display width
fn pad_key(key: &str) -> String {
    let padding = HELP_KEY_COLUMN.saturating_sub(key.width());
    format!("  {}{}", key, " ".repeat(padding))
}

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    let ideal_popup_height = HELP_ENTRIES.len() as u16 + HELP_POPUP_PADDING;
    let popup_area = popup::centered_popup(frame_area, popup_width(), ideal_popup_height);
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();

    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            lines.push(Line::from(""));
        } else if key.is_empty() {
            // Section header
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    *desc,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            let key_span = Span::styled(
                pad_key(key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
            let desc_span = Span::styled(*desc, Style::default().fg(Color::White));
            lines.push(Line::from(vec![key_span, desc_span]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )]));

    let content_height = lines.len() as u32;
    let visible_height = popup_area.height.saturating_sub(2);
    app.help.scroll.update_bounds(content_height, visible_height);

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((app.help.scroll.offset, 0));

    frame.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_width_fits_every_entry() {
        let width = popup_width() as usize;
        for (_, desc) in HELP_ENTRIES {
            assert!(2 + HELP_KEY_COLUMN + desc.width() + 2 <= width);
        }
    }

    #[test]
    fn test_pad_key_uses_display_width() {
        assert_eq!(pad_key("F1").width(), 2 + HELP_KEY_COLUMN);
        assert_eq!(pad_key("←/→ or Space").width(), 2 + HELP_KEY_COLUMN);
    }
}
