use tracing::trace;

use crate::arith::word::Word;
use crate::{Error, Result};

/// Returns the number of digits of `n` written in base `radix`.
///
/// `digit_length(0, radix)` is 0. The caller must pass `radix >= 2`; smaller
/// radices have no positional representation and the division chain would
/// never terminate, so they are rejected by a debug assertion rather than a
/// runtime error.
pub fn digit_length<W: Word>(n: W, radix: W) -> u32 {
    debug_assert!(radix > W::one(), "radix must be at least 2");
    let mut n = n;
    let mut len = 0;
    while n > W::zero() {
        n = n / radix;
        len += 1;
    }
    len
}

/// Returns the smallest `k` such that squaring `radix` repeatedly, `k`
/// times, produces a value exceeding `n` (the loop tracks `radix^(2^k)`).
///
/// For `radix <= 1` the chain can never exceed a positive `n`, and the loop
/// guard short-circuits to 0. The squaring chain runs in the wide domain:
/// the last square before the loop exits may not fit the word width when the
/// modulus sits near the top of the range.
pub fn radix_exponent<W: Word>(n: W, radix: W) -> u32 {
    if radix <= W::one() {
        return 0;
    }
    let n = n.widen();
    let mut x = radix.widen();
    let mut k = 0;
    while x <= n {
        x = x * x;
        k += 1;
    }
    k
}

/// Derives the domain-mapping multiplier for modulus `n`.
///
/// Starting from 1, squares modulo `n` once per binary digit of `n`. The
/// same factor maps the base into the working domain before exponentiation
/// and the accumulator back out afterwards. For `n = 1` every reduction
/// collapses to 0, so the factor is 0 and all downstream arithmetic
/// degenerates to 0; that is the expected degenerate case, not an error.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `n` is zero.
pub fn correction_factor<W: Word>(n: W) -> Result<W> {
    if n.is_zero() {
        return Err(Error::InvalidModulus("modulus cannot be zero".to_string()));
    }

    let two = W::one() + W::one();
    let rounds = digit_length(n, two);
    let mut t = W::one();
    for _ in 0..rounds {
        t = t.mul_mod(t, n);
    }
    Ok(t)
}

/// Computes `base^exp mod modulus`.
///
/// The base is mapped into the working domain through the correction factor,
/// a binary square-and-multiply loop consumes the exponent from the least
/// significant bit up, and a final correction multiply maps the accumulator
/// back out. Every multiply-mod step goes through the wide domain, so
/// intermediate products cannot overflow for any operand values of the
/// chosen word width.
///
/// A zero exponent returns `1 mod modulus`: 1 in the usual case, 0 under the
/// degenerate modulus 1 where every residue collapses to 0.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `modulus` is zero.
pub fn mod_pow<W: Word>(base: W, exp: W, modulus: W) -> Result<W> {
    if modulus.is_zero() {
        return Err(Error::InvalidModulus("modulus cannot be zero".to_string()));
    }
    if exp.is_zero() {
        return Ok(W::one() % modulus);
    }

    let two = W::one() + W::one();
    let k = radix_exponent(modulus, two);
    let t = correction_factor(modulus)?;
    trace!(%k, %t, "derived transform parameters");

    let mut a = base.mul_mod(t, modulus);
    let mut b = exp;
    let mut r = W::one() % modulus;
    while b > W::zero() {
        if b & W::one() == W::one() {
            r = r.mul_mod(a, modulus);
        }
        a = a.mul_mod(a, modulus);
        b = b >> 1;
    }

    Ok(r.mul_mod(t, modulus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_length_binary() {
        assert_eq!(digit_length(0u32, 2), 0);
        assert_eq!(digit_length(1u32, 2), 1);
        assert_eq!(digit_length(7u32, 2), 3);
        assert_eq!(digit_length(8u32, 2), 4);
        assert_eq!(digit_length(255u8, 2), 8);
        assert_eq!(digit_length(u64::MAX, 2), 64);
    }

    #[test]
    fn digit_length_decimal() {
        assert_eq!(digit_length(9u64, 10), 1);
        assert_eq!(digit_length(10u64, 10), 2);
        assert_eq!(digit_length(10_000_007u64, 10), 8);
    }

    #[test]
    fn radix_exponent_small_moduli() {
        assert_eq!(radix_exponent(0u32, 2), 0);
        assert_eq!(radix_exponent(1u32, 2), 0);
        assert_eq!(radix_exponent(2u32, 2), 1);
        assert_eq!(radix_exponent(16u32, 2), 3);
        assert_eq!(radix_exponent(21u32, 2), 3);
    }

    #[test]
    fn radix_exponent_degenerate_radix() {
        assert_eq!(radix_exponent(100u32, 0), 0);
        assert_eq!(radix_exponent(100u32, 1), 0);
    }

    #[test]
    fn radix_exponent_top_of_range() {
        // the squaring chain crosses the word width without overflowing
        assert_eq!(radix_exponent(u8::MAX, 2), 3);
        assert_eq!(radix_exponent(u64::MAX, 2), 6);
    }

    #[test]
    fn correction_factor_values() {
        assert_eq!(correction_factor(1u32).unwrap(), 0);
        assert_eq!(correction_factor(2u32).unwrap(), 1);
        assert_eq!(correction_factor(21u64).unwrap(), 1);
        assert_eq!(correction_factor(u64::MAX).unwrap(), 1);
    }

    #[test]
    fn correction_factor_rejects_zero_modulus() {
        assert!(correction_factor(0u32).is_err());
    }

    #[test]
    fn mod_pow_known_values() {
        assert_eq!(mod_pow(3u64, 5, 7).unwrap(), 5);
        assert_eq!(mod_pow(4u64, 13, 497).unwrap(), 445);
        assert_eq!(mod_pow(7u64, 560, 561).unwrap(), 1);
        assert_eq!(mod_pow(125u64, 16, 21).unwrap(), 1);
        assert_eq!(mod_pow(2u64, 1_000_000_000, 10_000_007).unwrap(), 6_705_727);
    }

    #[test]
    fn mod_pow_zero_exponent() {
        assert_eq!(mod_pow(5u32, 0, 7).unwrap(), 1);
        assert_eq!(mod_pow(0u32, 0, 7).unwrap(), 1);
        // under modulus 1 the unit itself collapses to 0
        assert_eq!(mod_pow(5u32, 0, 1).unwrap(), 0);
        assert_eq!(mod_pow(0u32, 0, 1).unwrap(), 0);
    }

    #[test]
    fn mod_pow_zero_base() {
        assert_eq!(mod_pow(0u32, 1, 7).unwrap(), 0);
        assert_eq!(mod_pow(0u32, 12, 561).unwrap(), 0);
    }

    #[test]
    fn mod_pow_modulus_one() {
        for a in 0..4u32 {
            for b in 1..4u32 {
                assert_eq!(mod_pow(a, b, 1).unwrap(), 0);
            }
        }
    }

    #[test]
    fn mod_pow_rejects_zero_modulus() {
        assert!(mod_pow(2u32, 3, 0).is_err());
    }

    #[test]
    fn mod_pow_full_width_operands() {
        let n = u64::MAX - 58;
        // base ≡ -1: even exponents give 1, odd give n - 1
        assert_eq!(mod_pow(n - 1, 2, n).unwrap(), 1);
        assert_eq!(mod_pow(n - 1, 3, n).unwrap(), n - 1);
    }

    #[test]
    fn mod_pow_narrow_widths() {
        assert_eq!(mod_pow(3u8, 5, 7).unwrap(), 5);
        assert_eq!(mod_pow(4u16, 13, 497).unwrap(), 445);
        assert_eq!(mod_pow(7u32, 560, 561).unwrap(), 1);
    }
}
