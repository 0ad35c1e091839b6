//! Calculator evaluation engine
//!
//! - [`calculator`]: the input state machine and its [`DisplayState`] output
//! - [`symbol`]: the closed input alphabet
//! - [`format`]: text/number conversion for the display
//! - [`ops`]: arithmetic for binary operators and unary functions
//! - [`errors`]: arithmetic and label errors
//! - [`script`]: headless evaluation of label sequences
//!
//! The engine has no knowledge of how symbols are produced or how the
//! display is drawn.
//!
//! [`DisplayState`]: calculator::DisplayState

pub mod calculator;
pub mod constants;
pub mod errors;
pub mod format;
pub mod ops;
pub mod script;
pub mod symbol;

pub use calculator::{Calculator, ConstantMode, DisplayState};
pub use symbol::{BinaryOp, Constant, MemoryOp, Symbol, UnaryFn};
