//! Display pane: pending expression above the current value

use crate::engine::calculator::DisplayState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the two-line readout
pub fn render_display_pane(frame: &mut Frame, area: Rect, display: &DisplayState, memory: f64) {
    let mut title = vec![Span::raw(" calctty ")];
    if memory != 0.0 {
        title.push(Span::styled(
            " M ",
            Style::default()
                .fg(DEFAULT_THEME.bg)
                .bg(DEFAULT_THEME.memory_key)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 0, 0));

    let current_style = if display.is_error() {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            display.expression_line(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(Span::styled(display.current.clone(), current_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
