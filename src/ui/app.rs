//! Main TUI application state and logic

use crate::diagnostics::Diagnostic;
use crate::session::Session;
use crate::ui::panes::source::EditView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
    Symbols,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> tree -> symbols)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Symbols,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Symbols => FocusedPane::Tree,
        }
    }
}

/// Text being edited and the cursor position in chars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub text: String,
    pub cursor: usize,
}

impl EditBuffer {
    fn new(text: &str) -> Self {
        EditBuffer {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.text
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }
}

/// The main application state
pub struct App {
    /// Source, tokens, symbols and tree
    pub session: Session,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Present while the source is being edited
    pub edit: Option<EditBuffer>,

    /// Per-pane scroll offsets
    pub tokens_scroll: usize,
    pub tree_scroll: usize,
    pub symbols_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            focused_pane: FocusedPane::Source,
            edit: None,
            tokens_scroll: 0,
            tree_scroll: 0,
            symbols_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Source on top, three result panes, status bar at the bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
            ])
            .split(rows[1]);

        let edit_view = self.edit.as_ref().map(|edit| EditView {
            buffer: &edit.text,
            cursor: edit.cursor,
        });

        super::panes::render_source_pane(
            frame,
            rows[0],
            self.session.source(),
            edit_view,
            self.focused_pane == FocusedPane::Source,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[0],
            self.session.tokens(),
            self.session.diagnostics(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            columns[1],
            self.session.tree(),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_symbols_pane(
            frame,
            columns[2],
            self.session.symbols(),
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        super::panes::render_status_bar(
            frame,
            rows[2],
            &self.status_message,
            self.status_is_error,
            self.edit.is_some(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.edit.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('1') | KeyCode::Char('e') => {
                self.edit = Some(EditBuffer::new(self.session.source()));
                self.focused_pane = FocusedPane::Source;
                self.set_status("Enter source code");
            }
            KeyCode::Char('2') | KeyCode::Char('l') => self.analyze(),
            KeyCode::Char('3') | KeyCode::Char('t') => self.build_tree(),
            KeyCode::Char('4') | KeyCode::Char('s') => self.save_symbols(),
            KeyCode::Char('5') | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_add(1);
                }
            }
            KeyCode::Char(c) => {
                self.set_error(format!("Invalid option '{}'. Try again.", c));
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(edit) = self.edit.take() {
                    self.session.set_source(edit.text);
                    self.set_status("Source updated");
                }
                return;
            }
            KeyCode::Esc => {
                self.edit = None;
                self.set_status("Edit cancelled");
                return;
            }
            _ => {}
        }

        let Some(edit) = self.edit.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) => edit.insert(c),
            KeyCode::Backspace => edit.backspace(),
            KeyCode::Delete => edit.delete(),
            KeyCode::Left => edit.cursor = edit.cursor.saturating_sub(1),
            KeyCode::Right => edit.cursor = (edit.cursor + 1).min(edit.len()),
            KeyCode::Home => edit.cursor = 0,
            KeyCode::End => edit.cursor = edit.len(),
            _ => {}
        }
    }

    fn analyze(&mut self) {
        let token_count = self.session.analyze().len();
        let ignored = self
            .session
            .diagnostics()
            .iter()
            .filter(|d| !matches!(d, Diagnostic::UnbalancedBraces { .. }))
            .count();
        self.tokens_scroll = 0;
        self.focused_pane = FocusedPane::Tokens;

        let mut message = format!(
            "{} token(s), {} symbol(s)",
            token_count,
            self.session.symbols().len()
        );
        if ignored > 0 {
            message.push_str(&format!(", {} ignored", ignored));
        }
        self.set_status(message);
    }

    fn build_tree(&mut self) {
        let tree = self.session.build_tree();
        let message = format!("Tree built: {} node(s), depth {}", tree.len(), tree.depth());
        let balance = tree.brace_balance();
        self.tree_scroll = 0;
        self.focused_pane = FocusedPane::Tree;

        if balance.is_balanced() {
            self.set_status(message);
        } else {
            self.set_error(format!(
                "{} ({} unclosed '{{', {} stray '}}')",
                message, balance.unclosed, balance.stray
            ));
        }
    }

    fn save_symbols(&mut self) {
        match self.session.save_symbols() {
            Ok(path) => {
                let message = format!("Symbol table saved to '{}'", path.display());
                self.set_status(message);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn focused_scroll(&mut self) -> Option<&mut usize> {
        match self.focused_pane {
            FocusedPane::Source => None,
            FocusedPane::Tokens => Some(&mut self.tokens_scroll),
            FocusedPane::Tree => Some(&mut self.tree_scroll),
            FocusedPane::Symbols => Some(&mut self.symbols_scroll),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SyntaxTree;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_menu_flow() {
        let mut app = App::new(Session::new());

        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "if(x){y=2;}");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.source(), "if(x){y=2;}");

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.tokens().len(), 10);
        assert_eq!(app.status_message, "10 token(s), 2 symbol(s)");

        press(&mut app, KeyCode::Char('3'));
        let tree = app.session.tree().unwrap();
        assert_eq!(tree.child_labels(SyntaxTree::ROOT), vec!["if", "(", "x", ")", "{"]);
        assert!(!app.status_is_error);

        press(&mut app, KeyCode::Char('5'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_digits_are_text_while_editing() {
        let mut app = App::new(Session::new());

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "5");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.source(), "");
    }

    #[test]
    fn test_edit_cursor_movement() {
        let mut app = App::new(Session::new());

        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "ac");
        press(&mut app, KeyCode::Left);
        type_text(&mut app, "b");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.source(), "b");
    }

    #[test]
    fn test_invalid_option() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Char('9'));

        assert!(app.status_is_error);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_unbalanced_tree_is_flagged() {
        let mut app = App::new(Session::new());
        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "{ a");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('3'));

        assert!(app.status_is_error);
    }
}
