use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub digit_key: Color,
    pub operator_key: Color,
    pub function_key: Color, // Cyan for unary functions and constants
    pub memory_key: Color,
    pub clear_key: Color,  // Pink for C and backspace
    pub equals_key: Color, // Blue for =
    pub pressed_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the display
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for keys
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    digit_key: Color::Rgb(205, 214, 244),
    operator_key: Color::Rgb(249, 226, 175),
    function_key: Color::Rgb(148, 226, 213),
    memory_key: Color::Rgb(180, 165, 120), // Muted yellow
    clear_key: Color::Rgb(243, 139, 168),
    equals_key: Color::Rgb(137, 180, 250),
    pressed_bg: Color::Rgb(69, 71, 90),
};
