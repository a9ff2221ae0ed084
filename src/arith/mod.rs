//! Fixed-width modular arithmetic.
//!
//! This module contains the mathematical building blocks of the crate:
//! - **word**: unsigned machine words paired with a double-width companion
//!   type, so multiply-mod steps never overflow
//! - **monty**: the Montgomery-style exponentiation pipeline (digit length,
//!   radix exponent, correction factor, `mod_pow`)

/// Montgomery-style modular exponentiation.
pub mod monty;
/// Unsigned word abstraction with double-width widening.
pub mod word;

pub use monty::{correction_factor, digit_length, mod_pow, radix_exponent};
pub use word::Word;
