//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]** — application state, event loop, mouse hit-testing
//! - **[`keymap`]** — key code to [`Symbol`] bindings, overridable from config
//! - **[`panes`]** — stateless render functions (display, keypad, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] with a [`Calculator`] and call [`App::run`].
//!
//! [`Symbol`]: crate::engine::symbol::Symbol
//! [`Calculator`]: crate::engine::calculator::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod keymap;
pub mod panes;
pub mod theme;

pub use app::App;
pub use keymap::Keymap;
