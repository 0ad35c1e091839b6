//! # Introduction
//!
//! calctty is a keypad calculator for the terminal. A small state machine
//! turns button presses into left-to-right arithmetic with one pending
//! operator and a memory register; a terminal UI built with
//! [ratatui](https://docs.rs/ratatui) draws the display and keypad.
//!
//! ## Pipeline
//!
//! ```text
//! Key / click → Keymap → Symbol → Calculator::apply → DisplayState → TUI
//! ```
//!
//! 1. [`engine`] — the input alphabet, the calculator state machine, number
//!    formatting, and a headless script runner.
//! 2. [`config`] — TOML settings: constant entry mode, logging, key bindings.
//! 3. [`logging`] — `tracing` subscriber setup.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use calctty::engine::{Calculator, Symbol};
//! use calctty::engine::script::{parse_script, run_script};
//!
//! let mut calc = Calculator::new();
//! let symbols = parse_script("7 + 3 + 2 =").unwrap();
//! assert_eq!(run_script(&mut calc, &symbols).current, "12");
//!
//! assert_eq!(calc.apply(Symbol::Digit(5)).current, "5");
//! ```

pub mod config;
pub mod engine;
pub mod logging;
pub mod ui;
