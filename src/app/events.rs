use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::state::{App, Focus};

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Name => self.handle_name_key(key),
            Focus::TextStyle => self.handle_style_key(key),
            Focus::Numbers => self.handle_numbers_key(key),
            Focus::Calculate => self.handle_button_key(key),
        }
    }

    /// Insert pasted text into the focused text field
    pub fn handle_paste_event(&mut self, text: String) {
        match self.focus {
            Focus::Name => {
                // Single-line field
                let line = text.replace(['\r', '\n'], " ");
                self.name_input.insert_str(line);
                self.sync_name();
            }
            Focus::Numbers => {
                self.numbers_input.insert_str(text);
                self.sync_numbers();
            }
            Focus::TextStyle | Focus::Calculate => {}
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup swallows every key while visible
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
                    self.help.close();
                }
                KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
                KeyCode::PageDown => self.help.scroll.page_down(),
                KeyCode::PageUp => self.help.scroll.page_up(),
                _ => {}
            }
            return true;
        }

        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::F(5) => {
                self.calculate();
                true
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                true
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                true
            }
            KeyCode::PageDown => {
                self.stats_scroll.page_down();
                true
            }
            KeyCode::PageUp => {
                self.stats_scroll.page_up();
                true
            }
            _ => false,
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.focus = self.focus.next();
            return;
        }

        if self.name_input.input(key) {
            // Ctrl+M also inserts a line break; the name stays single-line
            if self.name_input.lines().len() > 1 {
                self.name_input.undo();
                return;
            }
            self.sync_name();
        }
    }

    fn handle_numbers_key(&mut self, key: KeyEvent) {
        if self.numbers_input.input(key) {
            self.sync_numbers();
        }
    }

    fn handle_style_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.set_text_style(self.text_style.prev());
            }
            KeyCode::Right
            | KeyCode::Down
            | KeyCode::Char('l')
            | KeyCode::Char('j')
            | KeyCode::Char(' ') => {
                self.set_text_style(self.text_style.next());
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.calculate(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}
