//! Headless key scripts
//!
//! A script is a whitespace-separated list of keypad labels. Runs of digits
//! and decimal points are split into one symbol per character, so
//! `"12.5 x^y 2 ="` presses `1`, `2`, `.`, `5`, `x^y`, `2`, `=`.

use crate::engine::calculator::{Calculator, DisplayState};
use crate::engine::errors::SymbolError;
use crate::engine::symbol::Symbol;

/// Parse a script into the symbols it presses, in order
pub fn parse_script(script: &str) -> Result<Vec<Symbol>, SymbolError> {
    let mut symbols = Vec::new();

    for token in script.split_whitespace() {
        if is_numeric_run(token) {
            symbols.extend(token.chars().filter_map(Symbol::from_char));
        } else {
            symbols.push(Symbol::from_label(token)?);
        }
    }

    Ok(symbols)
}

/// Press every symbol in turn and return the final display
pub fn run_script(calculator: &mut Calculator, symbols: &[Symbol]) -> DisplayState {
    symbols
        .iter()
        .fold(calculator.display(), |_, &symbol| calculator.apply(symbol))
}

fn is_numeric_run(token: &str) -> bool {
    token.chars().count() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}
