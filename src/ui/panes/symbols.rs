//! Symbol table pane

use crate::symbols::SymbolTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    symbols: &SymbolTable,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Symbols ({}) ", symbols.len());
    let block = super::pane_block(&title, is_focused);

    let lines: Vec<Line> = symbols
        .sorted()
        .into_iter()
        .map(|(name, kind)| {
            Line::from(vec![
                Span::styled(
                    name.to_string(),
                    Style::default().fg(DEFAULT_THEME.token_color(kind)),
                ),
                Span::styled(
                    format!("  {}", kind.label()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])
        })
        .collect();

    super::render_scrolled_lines(frame, area, block, lines, "(empty)", scroll_offset);
}
