//! Conversion between display text and numbers
//!
//! The engine keeps its operands as text so the display shows exactly what
//! was typed. Text is parsed only at the moment of evaluation, and results
//! are rendered back through [`format_number`].

use crate::engine::constants::{ERROR_TEXT, FRACTION_DIGITS, ZERO_TEXT};
use crate::engine::errors::{CalcError, CalcResult};

/// Render a result for the display.
///
/// Integral values print without a fractional part. Anything else is
/// rendered with [`FRACTION_DIGITS`] fractional digits, then trailing zeros
/// and a dangling decimal point are stripped. Non-finite values render as
/// the error sentinel.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let text = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let fixed = format!("{:.*}", FRACTION_DIGITS, value);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    // -0.0 and values that round away to nothing
    if text == "-0" {
        ZERO_TEXT.to_string()
    } else {
        text
    }
}

/// Read display text back as a number.
pub fn parse_numeral(text: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidNumeral(text.to_string());

    if text == ERROR_TEXT {
        return Err(invalid());
    }

    let value: f64 = text.parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}
