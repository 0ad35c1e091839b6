//! TUI pane rendering modules
//!
//! - [`display`]: expression line and current value
//! - [`keypad`]: button grid, also used for mouse hit-testing
//! - [`status`]: status bar with memory register and keybindings
//!
//! Each pane exports a stateless `render_*` function.

pub mod display;
pub mod keypad;
pub mod status;

pub use display::render_display_pane;
pub use keypad::{button_at, keypad_cells, render_keypad_pane, KEYPAD_ROWS};
pub use status::render_status_bar;
