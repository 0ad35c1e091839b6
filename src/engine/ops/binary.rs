//! Binary operator evaluation

use crate::engine::errors::{CalcError, CalcResult};
use crate::engine::symbol::BinaryOp;

impl BinaryOp {
    /// Apply the operator to two operands.
    ///
    /// `Modulo` is the native `f64` remainder: the result takes the sign of
    /// the dividend (`-7 % 3 == -1`).
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        use BinaryOp::*;

        let result = match self {
            Add => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Divide | Modulo if rhs == 0.0 => {
                return Err(CalcError::DivisionByZero {
                    operation: self.name(),
                })
            }
            Divide => lhs / rhs,
            Modulo => lhs % rhs,
            Power => lhs.powf(rhs),
        };

        finite(result, self.name())
    }
}

#[inline]
pub(crate) fn finite(value: f64, operation: &'static str) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { operation })
    }
}
