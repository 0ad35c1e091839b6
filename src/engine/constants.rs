// Constants for the calculator engine

/// Sentinel shown in place of a value after any arithmetic failure
pub const ERROR_TEXT: &str = "Error";

/// Initial and post-clear display value
pub const ZERO_TEXT: &str = "0";

/// Maximum number of fractional digits kept when rendering a result
pub const FRACTION_DIGITS: usize = 10;

/// Largest factorial argument whose result is finite in an `f64` (170! ≈ 7.26e306)
pub const FACTORIAL_LIMIT: f64 = 170.0;
