//! Token listing pane, with diagnostics appended below the tokens

use crate::diagnostics::Diagnostic;
use crate::lexer::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Width of the kind column; fits the longest label, `PALABRA_RESERVADA`.
const KIND_WIDTH: usize = 18;

pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    diagnostics: &[Diagnostic],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Tokens ({}) ", tokens.len());
    let block = super::pane_block(&title, is_focused);

    let mut lines: Vec<Line> = tokens
        .iter()
        .map(|token| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", token.kind.label(), width = KIND_WIDTH),
                    Style::default().fg(DEFAULT_THEME.token_color(token.kind)),
                ),
                Span::styled(
                    token.text.clone(),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  @{}", token.location),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])
        })
        .collect();

    if !diagnostics.is_empty() {
        lines.push(Line::styled(
            "── ignored input ──",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        lines.extend(diagnostics.iter().map(|d| {
            Line::styled(d.to_string(), Style::default().fg(DEFAULT_THEME.error))
        }));
    }

    super::render_scrolled_lines(
        frame,
        area,
        block,
        lines,
        "(no tokens: press 2 to analyse)",
        scroll_offset,
    );
}
