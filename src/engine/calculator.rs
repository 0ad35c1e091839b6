//! The calculator state machine
//!
//! [`Calculator`] holds at most two operands and one pending operator, plus
//! a memory register. Each call to [`Calculator::apply`] consumes one
//! [`Symbol`] and returns the resulting [`DisplayState`].
//!
//! # Evaluation Model
//!
//! There is no precedence: pressing a second operator evaluates the pending
//! one first, so `7 + 3 + 2 =` reads as `((7 + 3) + 2)`. Arithmetic failures
//! never escape `apply`; the current value becomes the `"Error"` sentinel and
//! the next digit, decimal point, constant, or clear starts fresh. An operator
//! pressed on `"Error"` still arms, so the sentinel carries into the next
//! evaluation.

use crate::engine::constants::{ERROR_TEXT, ZERO_TEXT};
use crate::engine::errors::{CalcError, CalcResult};
use crate::engine::format::{format_number, parse_numeral};
use crate::engine::symbol::{BinaryOp, Constant, MemoryOp, Symbol, UnaryFn};
use serde::Deserialize;
use tracing::{debug, trace, warn};

/// How a constant key treats a numeral that is still being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstantMode {
    /// The constant always becomes the whole current value
    #[default]
    Replace,
    /// The constant's digits are appended to the numeral being typed
    Append,
}

/// Read-only view of the display after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Main readout
    pub current: String,
    /// Left operand of the pending operation, empty when none is armed
    pub previous: String,
    pub pending: Option<BinaryOp>,
}

impl DisplayState {
    /// Upper display line: the left operand followed by the operator glyph
    pub fn expression_line(&self) -> String {
        match self.pending {
            Some(op) => format!("{} {}", self.previous, op.glyph()),
            None => self.previous.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.current == ERROR_TEXT
    }
}

/// The calculator engine
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Numeral under construction or the last result
    current: String,

    /// Left operand captured when an operator was pressed
    previous: String,

    /// Operator waiting for its right operand
    pending: Option<BinaryOp>,

    /// Memory register, untouched by clear
    memory: f64,

    /// Next digit or decimal point starts a new numeral
    reset_next: bool,

    constant_mode: ConstantMode,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_constant_mode(ConstantMode::default())
    }

    pub fn with_constant_mode(constant_mode: ConstantMode) -> Self {
        Calculator {
            current: ZERO_TEXT.to_string(),
            previous: String::new(),
            pending: None,
            memory: 0.0,
            reset_next: false,
            constant_mode,
        }
    }

    /// Process one input symbol to completion
    pub fn apply(&mut self, symbol: Symbol) -> DisplayState {
        trace!(%symbol, current = %self.current, "apply");

        match symbol {
            Symbol::Digit(d) => self.enter_digit(d),
            Symbol::Decimal => self.enter_decimal(),
            Symbol::Operator(op) => self.press_operator(op),
            Symbol::Equals => self.press_equals(),
            Symbol::Clear => self.clear(),
            Symbol::Backspace => self.backspace(),
            Symbol::Sign => self.toggle_sign(),
            Symbol::Memory(op) => self.memory_op(op),
            Symbol::Unary(func) => self.unary(func),
            Symbol::Constant(constant) => self.constant(constant),
        }

        self.display()
    }

    pub fn display(&self) -> DisplayState {
        DisplayState {
            current: self.current.clone(),
            previous: self.previous.clone(),
            pending: self.pending,
        }
    }

    pub fn current_input(&self) -> &str {
        &self.current
    }

    pub fn previous_input(&self) -> &str {
        &self.previous
    }

    pub fn pending_operation(&self) -> Option<BinaryOp> {
        self.pending
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_next
    }

    pub fn is_error(&self) -> bool {
        self.current == ERROR_TEXT
    }

    pub fn constant_mode(&self) -> ConstantMode {
        self.constant_mode
    }

    /// Whether the next keystroke replaces the current value instead of extending it
    fn starts_fresh(&self) -> bool {
        self.reset_next || self.is_error()
    }

    fn enter_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            warn!(digit = d, "ignoring out-of-range digit");
            return;
        };

        if self.starts_fresh() || self.current == ZERO_TEXT {
            self.current = c.to_string();
            self.reset_next = false;
        } else {
            self.current.push(c);
        }
    }

    fn enter_decimal(&mut self) {
        if self.starts_fresh() {
            self.current = "0.".to_string();
            self.reset_next = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    fn press_operator(&mut self, op: BinaryOp) {
        if self.pending.is_some() && !self.reset_next {
            self.evaluate();
        }

        self.previous = self.current.clone();
        self.pending = Some(op);
        self.reset_next = true;
    }

    fn press_equals(&mut self) {
        if self.pending.is_some() {
            self.evaluate();
        }
        self.pending = None;
        self.reset_next = true;
    }

    fn clear(&mut self) {
        self.current = ZERO_TEXT.to_string();
        self.previous.clear();
        self.pending = None;
        self.reset_next = false;
    }

    fn backspace(&mut self) {
        if self.is_error() {
            self.current = ZERO_TEXT.to_string();
            return;
        }

        self.current.pop();
        if self.current.is_empty() || self.current == "-" {
            self.current = ZERO_TEXT.to_string();
        }
    }

    fn toggle_sign(&mut self) {
        if self.is_error() {
            return;
        }

        match self.current.strip_prefix('-') {
            Some(rest) => self.current = rest.to_string(),
            None => self.current.insert(0, '-'),
        }
    }

    fn memory_op(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory = 0.0,
            MemoryOp::Recall => {
                self.current = format_number(self.memory);
                self.reset_next = false;
            }
            MemoryOp::Add | MemoryOp::Subtract => match parse_numeral(&self.current) {
                Ok(value) => {
                    let updated = if op == MemoryOp::Add {
                        self.memory + value
                    } else {
                        self.memory - value
                    };
                    if updated.is_finite() {
                        self.memory = updated;
                    } else {
                        warn!(memory = self.memory, value, "memory update overflowed");
                    }
                }
                Err(e) => warn!(error = %e, "memory unchanged"),
            },
        }
    }

    fn unary(&mut self, func: UnaryFn) {
        let result = parse_numeral(&self.current).and_then(|x| func.apply(x));
        match result {
            Ok(value) => {
                debug!(function = func.name(), result = value, "unary");
                self.current = format_number(value);
                self.reset_next = true;
            }
            Err(e) => self.fail(e),
        }
    }

    fn constant(&mut self, constant: Constant) {
        let text = constant.text();
        let replace = self.constant_mode == ConstantMode::Replace || self.starts_fresh();
        if replace {
            self.current = text;
        } else {
            self.current.push_str(&text);
        }
        self.reset_next = false;
    }

    /// Evaluate the pending operation with the current value as right operand
    fn evaluate(&mut self) {
        let Some(op) = self.pending else {
            return;
        };

        match self.compute(op) {
            Ok(value) => {
                debug!(
                    lhs = %self.previous,
                    op = op.name(),
                    rhs = %self.current,
                    result = value,
                    "evaluate"
                );
                self.current = format_number(value);
                self.previous.clear();
            }
            Err(e) => {
                self.fail(e);
                self.previous.clear();
                self.pending = None;
            }
        }
    }

    fn compute(&self, op: BinaryOp) -> CalcResult<f64> {
        let lhs = parse_numeral(&self.previous)?;
        let rhs = parse_numeral(&self.current)?;
        op.apply(lhs, rhs)
    }

    fn fail(&mut self, error: CalcError) {
        warn!(error = %error, "calculation failed");
        self.current = ERROR_TEXT.to_string();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
