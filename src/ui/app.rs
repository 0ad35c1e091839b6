//! Main TUI application state and logic

use crate::engine::calculator::{Calculator, DisplayState};
use crate::engine::format::format_number;
use crate::engine::symbol::{MemoryOp, Symbol};
use crate::ui::keymap::Keymap;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a pressed button stays highlighted
const PRESS_HIGHLIGHT: Duration = Duration::from_millis(150);

/// Height of the display pane: two text lines plus borders
const DISPLAY_HEIGHT: u16 = 4;

/// The main application state
pub struct App {
    /// The calculator engine
    pub calculator: Calculator,

    /// Key bindings
    pub keymap: Keymap,

    /// Display returned by the last action
    pub display: DisplayState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last pressed symbol and when, for the keypad highlight
    pub last_pressed: Option<(Symbol, Instant)>,

    /// Keypad area from the last render, used for mouse hit-testing
    pub keypad_area: Rect,
}

impl App {
    /// Create a new app around the given engine and key bindings
    pub fn new(calculator: Calculator, keymap: Keymap) -> Self {
        let display = calculator.display();
        App {
            calculator,
            keymap,
            display,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_pressed: None,
            keypad_area: Rect::default(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the press highlight can expire
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Feed one symbol to the engine and refresh the display
    pub fn press(&mut self, symbol: Symbol) {
        self.display = self.calculator.apply(symbol);
        self.last_pressed = Some((symbol, Instant::now()));

        self.status_message = if self.display.is_error() {
            "Error: press a digit or C to continue".to_string()
        } else {
            match symbol {
                Symbol::Memory(MemoryOp::Clear) => "Memory cleared".to_string(),
                Symbol::Memory(MemoryOp::Add | MemoryOp::Subtract) => {
                    format!("Memory: {}", format_number(self.calculator.memory()))
                }
                _ => "Ready!".to_string(),
            }
        };
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Display on top, keypad in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        self.keypad_area = chunks[1];

        super::panes::render_display_pane(
            frame,
            chunks[0],
            &self.display,
            self.calculator.memory(),
        );

        super::panes::render_keypad_pane(frame, chunks[1], self.highlighted());

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.calculator.memory(),
            self.display.is_error(),
        );
    }

    /// Symbol to highlight, if it was pressed recently enough
    fn highlighted(&self) -> Option<Symbol> {
        self.last_pressed
            .filter(|(_, at)| at.elapsed() < PRESS_HIGHLIGHT)
            .map(|(symbol, _)| symbol)
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => match self.keymap.lookup(&key) {
                Some(symbol) => self.press(symbol),
                None => debug!(?key, "unbound key"),
            },
        }
    }

    /// Handle mouse clicks on the keypad
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(symbol) =
                super::panes::button_at(self.keypad_area, mouse.column, mouse.row)
            {
                self.press(symbol);
            }
        }
    }
}
