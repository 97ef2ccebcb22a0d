use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::help::HelpPopupState;
use crate::scroll::ScrollState;
use crate::session::{InputEvent, OutputSlot, Session, TextStyle};

/// Which form control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    TextStyle,
    Numbers,
    Calculate,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::TextStyle,
            Focus::TextStyle => Focus::Numbers,
            Focus::Numbers => Focus::Calculate,
            Focus::Calculate => Focus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Calculate,
            Focus::TextStyle => Focus::Name,
            Focus::Numbers => Focus::TextStyle,
            Focus::Calculate => Focus::Numbers,
        }
    }
}

/// Application state
pub struct App {
    pub session: Session,
    pub name_input: TextArea<'static>,
    pub numbers_input: TextArea<'static>,
    pub text_style: TextStyle,
    pub focus: Focus,
    pub help: HelpPopupState,
    pub stats_scroll: ScrollState,
    pub should_quit: bool,
}

impl App {
    /// Create a new App around an initialised session
    pub fn new(session: Session) -> Self {
        let input = session.input();

        let mut name_input = TextArea::from([input.name.clone()]);
        name_input.set_cursor_line_style(Style::default());
        name_input.move_cursor(tui_textarea::CursorMove::End);

        let mut numbers_input = TextArea::from(input.numbers.lines().map(str::to_string));
        numbers_input.set_cursor_line_style(Style::default());
        numbers_input.move_cursor(tui_textarea::CursorMove::Bottom);
        numbers_input.move_cursor(tui_textarea::CursorMove::End);

        let text_style = input.text_style.parse().unwrap_or_default();

        Self {
            session,
            name_input,
            numbers_input,
            text_style,
            focus: Focus::Name,
            help: HelpPopupState::new(),
            stats_scroll: ScrollState::new(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output(&self, slot: OutputSlot) -> &str {
        self.session.output(slot)
    }

    /// Current text of the name field
    pub fn name(&self) -> &str {
        self.name_input.lines()[0].as_ref()
    }

    /// Current text of the numbers field, lines joined with '\n'
    pub fn numbers(&self) -> String {
        self.numbers_input.lines().join("\n")
    }

    /// Push the name field into the session
    pub fn sync_name(&mut self) {
        let name = self.name().to_string();
        self.session.apply(InputEvent::SetName(name));
    }

    /// Push the numbers field into the session
    pub fn sync_numbers(&mut self) {
        let numbers = self.numbers();
        self.session.apply(InputEvent::SetNumbers(numbers));
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.text_style = style;
        self.session
            .apply(InputEvent::SetTextStyle(style.name().to_string()));
    }

    /// Fire the calculate action
    pub fn calculate(&mut self) {
        self.sync_numbers();
        self.session.apply(InputEvent::Calculate);
        self.stats_scroll.reset();
    }
}
