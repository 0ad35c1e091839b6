//! Keypad grid rendering and mouse hit-testing

use crate::engine::symbol::{BinaryOp, Constant, MemoryOp, Symbol, UnaryFn};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use BinaryOp::*;
use Symbol::{Backspace, Clear, Decimal, Digit, Equals, Operator, Sign, Unary};

/// Button rows, top to bottom
pub const KEYPAD_ROWS: &[&[Symbol]] = &[
    &[
        Symbol::Memory(MemoryOp::Clear),
        Symbol::Memory(MemoryOp::Recall),
        Symbol::Memory(MemoryOp::Add),
        Symbol::Memory(MemoryOp::Subtract),
        Clear,
        Backspace,
    ],
    &[
        Unary(UnaryFn::SquareRoot),
        Unary(UnaryFn::Square),
        Unary(UnaryFn::Cube),
        Operator(Power),
        Unary(UnaryFn::Reciprocal),
        Sign,
    ],
    &[Digit(7), Digit(8), Digit(9), Operator(Divide), Operator(Modulo)],
    &[Digit(4), Digit(5), Digit(6), Operator(Multiply), Unary(UnaryFn::Factorial)],
    &[Digit(1), Digit(2), Digit(3), Operator(Subtract), Symbol::Constant(Constant::Pi)],
    &[Digit(0), Decimal, Equals, Operator(Add), Symbol::Constant(Constant::E)],
];

/// Screen rectangle of every button inside `area`
pub fn keypad_cells(area: Rect) -> Vec<(Rect, Symbol)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            KEYPAD_ROWS
                .iter()
                .map(|_| Constraint::Ratio(1, KEYPAD_ROWS.len() as u32)),
        )
        .split(area);

    let mut cells = Vec::new();
    for (row_area, row) in rows.iter().zip(KEYPAD_ROWS) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(row.iter().map(|_| Constraint::Ratio(1, row.len() as u32)))
            .split(*row_area);
        cells.extend(columns.iter().copied().zip(row.iter().copied()));
    }
    cells
}

/// Symbol under the terminal cell (`column`, `row`), if any
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Symbol> {
    keypad_cells(area)
        .into_iter()
        .find(|(rect, _)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(_, symbol)| symbol)
}

fn key_color(symbol: Symbol) -> Color {
    match symbol {
        Digit(_) | Decimal => DEFAULT_THEME.digit_key,
        Operator(_) => DEFAULT_THEME.operator_key,
        Equals => DEFAULT_THEME.equals_key,
        Clear | Backspace => DEFAULT_THEME.clear_key,
        Symbol::Memory(_) => DEFAULT_THEME.memory_key,
        Sign | Unary(_) | Symbol::Constant(_) => DEFAULT_THEME.function_key,
    }
}

/// Render the keypad, highlighting `pressed` if set
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, pressed: Option<Symbol>) {
    for (cell, symbol) in keypad_cells(area) {
        let is_pressed = pressed == Some(symbol);

        let mut style = Style::default().fg(key_color(symbol));
        if is_pressed {
            style = style.bg(DEFAULT_THEME.pressed_bg).add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

        // Vertically center the caption inside the border
        let inner_height = cell.height.saturating_sub(2) as usize;
        let mut lines = vec![Line::from(""); inner_height.saturating_sub(1) / 2];
        lines.push(Line::from(symbol.label()));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, cell);
    }
}
