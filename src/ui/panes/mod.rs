//! TUI pane rendering modules
//!
//! Each pane module exports one `render_*` function that draws into a given
//! area and owns no state of its own; scroll offsets live in
//! [`App`](crate::ui::App) and are passed in by reference so a pane can clamp
//! them to its content.
//!
//! - [`source`]: the source line(s), highlighted by token kind, or the edit buffer
//! - [`tokens`]: token listing followed by lexer and tree diagnostics
//! - [`tree`]: the brace-depth tree in its `|- ` layout
//! - [`symbols`]: symbol table entries
//! - [`status`]: status bar with mode, message and keybindings

pub mod source;
pub mod status;
pub mod symbols;
pub mod tokens;
pub mod tree;

pub use source::render_source_pane;
pub use status::render_status_bar;
pub use symbols::render_symbols_pane;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Bordered block whose border reflects focus
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Render `lines` as a scrollable list, or `placeholder` when there are none.
fn render_scrolled_lines(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    lines: Vec<Line<'_>>,
    placeholder: &str,
    scroll_offset: &mut usize,
) {
    if lines.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new(placeholder.to_string())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(ListItem::new)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
