//! Source pane
//!
//! Shows the committed source with each token colored by kind. Characters
//! the lexer drops are drawn dimmed, so ignored input is visible at a
//! glance. In edit mode the pane shows the edit buffer and its cursor
//! instead.

use crate::lexer::{Lexer, Token};
use crate::symbols::SymbolTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Edit buffer and cursor (a char index) while in edit mode
pub struct EditView<'a> {
    pub buffer: &'a str,
    pub cursor: usize,
}

/// Highlight one source line using the tokens found on it.
fn highlight_line<'a>(line: &'a str, line_no: usize, tokens: &[Token]) -> Line<'a> {
    let mut spans = Vec::new();
    let mut on_line = tokens.iter().filter(|t| t.location.line == line_no).peekable();
    let mut column = 1;
    let mut dropped = String::new();

    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        match on_line.peek() {
            Some(token) if token.location.column == column => {
                if !dropped.is_empty() {
                    spans.push(dim_span(std::mem::take(&mut dropped)));
                }
                let len = token.text.chars().count();
                // Tokens are ASCII, so their char count equals their width.
                for _ in 1..len {
                    chars.next();
                }
                column += len;
                spans.push(Span::styled(
                    token.text.clone(),
                    Style::default().fg(DEFAULT_THEME.token_color(token.kind)),
                ));
                on_line.next();
            }
            _ => {
                dropped.push(ch);
                column += 1;
            }
        }
    }
    if !dropped.is_empty() {
        spans.push(dim_span(dropped));
    }

    Line::from(spans)
}

fn dim_span<'a>(text: String) -> Span<'a> {
    // Whitespace is dropped too but needs no styling.
    if text.trim().is_empty() {
        Span::raw(text)
    } else {
        Span::styled(
            text,
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    }
}

fn edit_line<'a>(edit: &EditView<'a>) -> Line<'a> {
    let split = edit
        .buffer
        .char_indices()
        .nth(edit.cursor)
        .map(|(i, _)| i)
        .unwrap_or(edit.buffer.len());
    let (before, rest) = edit.buffer.split_at(split);
    let mut rest_chars = rest.chars();
    let under_cursor = rest_chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after = rest_chars.as_str();

    let cursor_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::REVERSED);

    Line::from(vec![
        Span::raw(before),
        Span::styled(under_cursor, cursor_style),
        Span::raw(after),
    ])
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    edit: Option<EditView<'_>>,
    is_focused: bool,
) {
    let title = if edit.is_some() {
        " Source (editing: Enter to commit, Esc to cancel) "
    } else {
        " Source "
    };
    let block = super::pane_block(title, is_focused || edit.is_some());

    let lines: Vec<Line> = match &edit {
        Some(edit) => vec![edit_line(edit)],
        None if source.is_empty() => vec![Line::styled(
            "(empty: press 1 to enter source code)",
            Style::default().fg(DEFAULT_THEME.comment),
        )],
        None => {
            // Highlighting must not touch the session's symbol table.
            let mut scratch = SymbolTable::new();
            let tokens = Lexer::new(source).tokenize(&mut scratch);
            source
                .lines()
                .enumerate()
                .map(|(i, line)| highlight_line(line, i + 1, &tokens))
                .collect()
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
