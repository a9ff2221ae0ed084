//! Montgomery-style modular exponentiation over fixed-width unsigned integers.
//!
//! Computes `a^b mod n` with a binary square-and-multiply loop driven through
//! a transformed (Montgomery-like) domain. The crate is generic over the word
//! width (`u8` through `u64`); every multiply-mod step widens into a
//! double-width accumulator before reducing, so the full word range is usable
//! for all three operands without overflow.
//!
//! All operations are pure and reentrant. The only reported failure is a zero
//! modulus ([`Error::InvalidModulus`]); behavior outside the documented
//! preconditions (for example a radix below 2 passed to [`digit_length`]) is
//! out of contract.
//!
//! # Examples
//!
//! ```rust
//! use montpow::mod_pow;
//!
//! let r = mod_pow(4u64, 13, 497)?;
//! assert_eq!(r, 445);
//! # Ok::<(), montpow::Error>(())
//! ```

/// Fixed-width modular arithmetic.
pub mod arith;
/// Error types.
pub mod error;

pub use arith::monty::{correction_factor, digit_length, mod_pow, radix_exponent};
pub use arith::word::Word;
pub use error::Error;

/// Result type for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;
