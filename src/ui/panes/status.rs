//! Status bar rendering with keybindings and mode indicator

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    is_error: bool,
    is_editing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let bar_bg = DEFAULT_THEME.current_line_bg;

    // Left side: mode badge and last message
    let (mode_text, mode_bg) = if is_editing {
        (" EDIT ", DEFAULT_THEME.secondary)
    } else {
        (" MENU ", DEFAULT_THEME.primary)
    };

    let left_spans = vec![
        Span::styled(
            mode_text,
            Style::default()
                .bg(mode_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(bar_bg).fg(if is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().bg(bar_bg).fg(DEFAULT_THEME.fg);
    let sep_style = Style::default().bg(bar_bg).fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = if is_editing {
        &[(" ↵ ", " commit "), (" esc ", " cancel "), (" ←/→ ", " move ")]
    } else {
        &[
            (" 1 ", " edit "),
            (" 2 ", " lex "),
            (" 3 ", " tree "),
            (" 4 ", " save symbols "),
            (" tab ", " focus "),
            (" 5/q ", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
