use crate::lexer::TokenKind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub keyword: Color,
    pub identifier: Color,
    pub number: Color,
    pub operator: Color,
    pub delimiter: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

impl Theme {
    /// Foreground color for a token of the given kind
    pub fn token_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::ReservedWord => self.keyword,
            TokenKind::Identifier => self.identifier,
            TokenKind::Number => self.number,
            TokenKind::Operator | TokenKind::Assignment => self.operator,
            TokenKind::Delimiter => self.delimiter,
            TokenKind::Unknown => self.error,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    identifier: Color::Rgb(205, 214, 244),     // Plain text
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    operator: Color::Rgb(148, 226, 213),       // Cyan for operators and `=`
    delimiter: Color::Rgb(249, 226, 175),      // Yellow for delimiters
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars and the edit cursor
};
