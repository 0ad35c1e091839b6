//! Unary function evaluation

use crate::engine::constants::FACTORIAL_LIMIT;
use crate::engine::errors::{CalcError, CalcResult};
use crate::engine::ops::binary::finite;
use crate::engine::symbol::UnaryFn;

impl UnaryFn {
    pub fn apply(self, x: f64) -> CalcResult<f64> {
        use UnaryFn::*;

        let domain = || CalcError::Domain {
            function: self.name(),
            value: x,
        };

        let result = match self {
            SquareRoot if x < 0.0 => return Err(domain()),
            SquareRoot => x.sqrt(),
            Square => x * x,
            Cube => x * x * x,
            Reciprocal if x == 0.0 => return Err(domain()),
            Reciprocal => 1.0 / x,
            Factorial => factorial(x).ok_or_else(domain)?,
        };

        finite(result, self.name())
    }
}

/// n! for non-negative integral n up to [`FACTORIAL_LIMIT`]
fn factorial(n: f64) -> Option<f64> {
    if n < 0.0 || n.fract() != 0.0 || n > FACTORIAL_LIMIT {
        return None;
    }
    Some((2..=n as u32).fold(1.0, |acc, k| acc * f64::from(k)))
}
