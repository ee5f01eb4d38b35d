//! Tree pane: the brace-depth tree, one node per row

use crate::constants::TREE_INDENT;
use crate::tree::SyntaxTree;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: Option<&SyntaxTree>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match tree {
        Some(tree) => format!(" Tree ({} nodes, depth {}) ", tree.len(), tree.depth()),
        None => " Tree ".to_string(),
    };
    let block = super::pane_block(&title, is_focused);

    let lines: Vec<Line> = tree
        .map(|tree| {
            tree.walk()
                .map(|(depth, node)| {
                    let label_style = match node.kind {
                        Some(kind) => Style::default().fg(DEFAULT_THEME.token_color(kind)),
                        None => Style::default()
                            .fg(DEFAULT_THEME.primary)
                            .add_modifier(Modifier::BOLD),
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{}|- ", " ".repeat(depth * TREE_INDENT)),
                            Style::default().fg(DEFAULT_THEME.comment),
                        ),
                        Span::styled(node.label.clone(), label_style),
                    ])
                })
                .collect()
        })
        .unwrap_or_default();

    super::render_scrolled_lines(
        frame,
        area,
        block,
        lines,
        "(no tree: press 3 to build)",
        scroll_offset,
    );
}
