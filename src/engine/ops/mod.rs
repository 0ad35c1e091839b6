// Arithmetic for binary operators and unary functions

pub mod binary;
pub mod unary;
