use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::help::{help_line_render, help_popup_render};
use crate::session::{OutputSlot, TextStyle};
use crate::widgets::popup;

pub const APP_TITLE: &str = "Private Package Integration Demo";
pub const CALCULATE_LABEL: &str = "Calculate Stats";
const SIDEBAR_WIDTH: u16 = 38;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

        self.render_title(frame, layout[0]);

        let body = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(layout[1]);

        self.render_sidebar(frame, body[0]);
        self.render_cards(frame, body[1]);

        help_line_render::render_line(self, frame, layout[2]);

        if self.help.visible {
            help_popup_render::render_popup(self, frame);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, area);
    }

    fn border_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Cyan) // Focused
        } else {
            Style::default().fg(Color::DarkGray) // Unfocused
        }
    }

    /// Render the form controls (left)
    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Package Controls ")
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Text style
            Constraint::Min(4),    // Numbers
            Constraint::Length(3), // Button
        ])
        .split(inner);

        let name_border = self.border_style(Focus::Name);
        self.name_input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter your name: ")
                .border_style(name_border),
        );
        frame.render_widget(&self.name_input, rows[0]);

        self.render_style_selector(frame, rows[1]);

        let numbers_border = self.border_style(Focus::Numbers);
        self.numbers_input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter numbers (comma separated): ")
                .border_style(numbers_border),
        );
        frame.render_widget(&self.numbers_input, rows[2]);

        self.render_calculate_button(frame, rows[3]);
    }

    fn render_style_selector(&self, frame: &mut Frame, area: Rect) {
        let spans: Vec<Span> = TextStyle::ALL
            .iter()
            .flat_map(|style| {
                let label = format!(" {} ", style.label());
                let span = if *style == self.text_style {
                    Span::styled(
                        label,
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(label, Style::default().fg(Color::Gray))
                };
                [span, Span::raw(" ")]
            })
            .collect();

        let selector = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Text style: ")
                .border_style(self.border_style(Focus::TextStyle)),
        );
        frame.render_widget(selector, area);
    }

    fn render_calculate_button(&self, frame: &mut Frame, area: Rect) {
        let style = if self.focus == Focus::Calculate {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let button = Paragraph::new(format!("[ {} ]", CALCULATE_LABEL))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style(Focus::Calculate)),
            );
        frame.render_widget(button, popup::inset_rect(area, 2, 0));
    }

    /// Render the output cards (right)
    fn render_cards(&mut self, frame: &mut Frame, area: Rect) {
        let cards = Layout::vertical([
            Constraint::Length(6), // Package status: status + 3 info lines
            Constraint::Length(8), // Greeting + styled text
            Constraint::Min(5),    // Statistics
        ])
        .split(area);

        let mut status_lines = vec![Line::from(
            self.output(OutputSlot::PackageStatus).to_string(),
        )];
        status_lines.extend(
            self.output(OutputSlot::PackageInfo)
                .lines()
                .map(|l| Line::from(l.to_string())),
        );
        render_card(frame, cards[0], " Package Status ", status_lines, 0);

        let greeting_lines = vec![
            Line::from(self.output(OutputSlot::GreetingOutput).to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Styled Text Demo",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.output(OutputSlot::StyledText).to_string()),
        ];
        render_card(frame, cards[1], " Greeting Demo ", greeting_lines, 0);

        let stats_text = self.output(OutputSlot::StatsOutput).to_string();
        let stats_style = if stats_text.starts_with("Error: ") {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let stats_lines: Vec<Line> = stats_text
            .lines()
            .map(|l| Line::styled(l.to_string(), stats_style))
            .collect();

        let visible_height = cards[2].height.saturating_sub(2);
        self.stats_scroll
            .update_bounds(stats_lines.len() as u32, visible_height);
        render_card(
            frame,
            cards[2],
            " Statistics Demo ",
            stats_lines,
            self.stats_scroll.offset,
        );
    }
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(Color::Blue));

    let content = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(content, area);
}
