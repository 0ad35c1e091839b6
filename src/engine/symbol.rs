//! The calculator's input alphabet
//!
//! Every button press or key binding is reduced to a [`Symbol`] before it
//! reaches the engine. Dispatch in [`Calculator::apply`] matches on this enum
//! exhaustively, so adding a symbol without handling it is a compile error.
//!
//! [`Calculator::apply`]: crate::engine::calculator::Calculator::apply

use crate::engine::errors::SymbolError;
use std::fmt;
use std::str::FromStr;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Binary operators that wait for a second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl BinaryOp {
    /// Glyph shown after the left operand in the expression line
    pub fn glyph(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "−",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "^",
        }
    }

    /// Short name used in log and error messages
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "addition",
            BinaryOp::Subtract => "subtraction",
            BinaryOp::Multiply => "multiplication",
            BinaryOp::Divide => "division",
            BinaryOp::Modulo => "modulo",
            BinaryOp::Power => "power",
        }
    }
}

/// Memory register commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

/// Single-argument functions applied to the current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFn {
    SquareRoot,
    Square,
    Cube,
    Reciprocal,
    Factorial,
}

impl UnaryFn {
    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::SquareRoot => "square root",
            UnaryFn::Square => "square",
            UnaryFn::Cube => "cube",
            UnaryFn::Reciprocal => "reciprocal",
            UnaryFn::Factorial => "factorial",
        }
    }
}

/// Named mathematical constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    /// Shortest decimal text that reads back as [`Constant::value`]
    pub fn text(self) -> String {
        self.value().to_string()
    }
}

/// One discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A decimal digit, 0 through 9
    Digit(u8),
    Decimal,
    Operator(BinaryOp),
    Equals,
    Clear,
    Backspace,
    /// Toggle the leading minus sign
    Sign,
    Memory(MemoryOp),
    Unary(UnaryFn),
    Constant(Constant),
}

impl Symbol {
    /// Map a single typed character onto a symbol, if it names one
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Symbol::Digit(d as u8)),
            '.' => Some(Symbol::Decimal),
            '+' => Some(Symbol::Operator(BinaryOp::Add)),
            '-' | '−' => Some(Symbol::Operator(BinaryOp::Subtract)),
            '*' | '×' => Some(Symbol::Operator(BinaryOp::Multiply)),
            '/' | '÷' => Some(Symbol::Operator(BinaryOp::Divide)),
            '%' => Some(Symbol::Operator(BinaryOp::Modulo)),
            '^' => Some(Symbol::Operator(BinaryOp::Power)),
            '=' => Some(Symbol::Equals),
            '√' => Some(Symbol::Unary(UnaryFn::SquareRoot)),
            '!' => Some(Symbol::Unary(UnaryFn::Factorial)),
            '±' => Some(Symbol::Sign),
            '⌫' => Some(Symbol::Backspace),
            'π' => Some(Symbol::Constant(Constant::Pi)),
            'e' => Some(Symbol::Constant(Constant::E)),
            _ => None,
        }
    }

    /// Parse a keypad caption or one of its ASCII aliases
    pub fn from_label(label: &str) -> Result<Symbol, SymbolError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(SymbolError::Empty);
        }

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(symbol) = Symbol::from_char(c) {
                return Ok(symbol);
            }
        }

        let symbol = match label.to_ascii_lowercase().as_str() {
            "x^y" | "pow" | "power" => Symbol::Operator(BinaryOp::Power),
            "mod" => Symbol::Operator(BinaryOp::Modulo),
            "enter" | "equals" => Symbol::Equals,
            "c" | "clear" | "esc" => Symbol::Clear,
            "bs" | "backspace" | "del" => Symbol::Backspace,
            "neg" | "sign" | "+/-" => Symbol::Sign,
            "mc" => Symbol::Memory(MemoryOp::Clear),
            "mr" => Symbol::Memory(MemoryOp::Recall),
            "m+" => Symbol::Memory(MemoryOp::Add),
            "m-" => Symbol::Memory(MemoryOp::Subtract),
            "sqrt" => Symbol::Unary(UnaryFn::SquareRoot),
            "x²" | "x2" | "sq" | "square" => Symbol::Unary(UnaryFn::Square),
            "x³" | "x3" | "cube" => Symbol::Unary(UnaryFn::Cube),
            "1/x" | "inv" => Symbol::Unary(UnaryFn::Reciprocal),
            "fact" => Symbol::Unary(UnaryFn::Factorial),
            "pi" => Symbol::Constant(Constant::Pi),
            _ => return Err(SymbolError::Unknown(label.to_string())),
        };
        Ok(symbol)
    }

    /// Caption printed on the keypad button for this symbol
    pub fn label(self) -> &'static str {
        match self {
            Symbol::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Symbol::Decimal => ".",
            Symbol::Operator(BinaryOp::Add) => "+",
            Symbol::Operator(BinaryOp::Subtract) => "-",
            Symbol::Operator(BinaryOp::Multiply) => "*",
            Symbol::Operator(BinaryOp::Divide) => "/",
            Symbol::Operator(BinaryOp::Modulo) => "%",
            Symbol::Operator(BinaryOp::Power) => "x^y",
            Symbol::Equals => "=",
            Symbol::Clear => "C",
            Symbol::Backspace => "⌫",
            Symbol::Sign => "±",
            Symbol::Memory(MemoryOp::Clear) => "MC",
            Symbol::Memory(MemoryOp::Recall) => "MR",
            Symbol::Memory(MemoryOp::Add) => "M+",
            Symbol::Memory(MemoryOp::Subtract) => "M-",
            Symbol::Unary(UnaryFn::SquareRoot) => "√",
            Symbol::Unary(UnaryFn::Square) => "x²",
            Symbol::Unary(UnaryFn::Cube) => "x³",
            Symbol::Unary(UnaryFn::Reciprocal) => "1/x",
            Symbol::Unary(UnaryFn::Factorial) => "!",
            Symbol::Constant(Constant::Pi) => "π",
            Symbol::Constant(Constant::E) => "e",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::from_label(s)
    }
}
