//! Error types for the calculator engine
//!
//! [`CalcError`] covers every arithmetic failure the engine can hit while
//! evaluating a pending operation or a unary function. None of these errors
//! leave the engine: [`Calculator::apply`] logs them and replaces the display
//! with the [`ERROR_TEXT`] sentinel.
//!
//! [`SymbolError`] is returned when a textual label cannot be mapped onto the
//! input alphabet (config key bindings, headless scripts).
//!
//! [`Calculator::apply`]: crate::engine::calculator::Calculator::apply
//! [`ERROR_TEXT`]: crate::engine::constants::ERROR_TEXT

use thiserror::Error;

/// Arithmetic failures raised during evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The display text could not be read back as a number
    #[error("invalid numeral '{0}'")]
    InvalidNumeral(String),

    /// Division or remainder with a zero right operand
    #[error("{operation} by zero")]
    DivisionByZero { operation: &'static str },

    /// Function argument outside the function's domain
    #[error("{function} is undefined for {value}")]
    Domain { function: &'static str, value: f64 },

    /// Result is NaN or infinite
    #[error("{operation} produced a non-finite result")]
    NonFinite { operation: &'static str },
}

/// Failure to map a label onto a [`Symbol`](crate::engine::symbol::Symbol)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("unknown symbol '{0}'")]
    Unknown(String),

    #[error("empty symbol label")]
    Empty,
}

pub type CalcResult<T> = Result<T, CalcError>;
