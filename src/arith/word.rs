use core::fmt::{Debug, Display};

use num_traits::{PrimInt, Unsigned};

/// Fixed-width unsigned word paired with a double-width companion type.
///
/// Every multiply-mod step in this crate widens both operands, multiplies in
/// the wide domain, reduces modulo `n`, and narrows back. `Wide` must hold
/// the full product of two words, which each implementation guarantees by
/// pairing a width with its doubled width (`u8`/`u16` through `u64`/`u128`).
pub trait Word: PrimInt + Unsigned + Debug + Display {
    /// Unsigned type with at least twice the bit width of `Self`.
    type Wide: PrimInt + Unsigned;

    /// Converts into the wide domain, losslessly.
    fn widen(self) -> Self::Wide;

    /// Converts a wide value known to fit back into the word width.
    fn narrow(wide: Self::Wide) -> Self;

    /// Computes `(self * rhs) mod modulus` without overflow.
    ///
    /// The product is taken in the wide domain and reduced before narrowing,
    /// so the full word range is usable for both operands and the modulus.
    /// `modulus` must be non-zero.
    fn mul_mod(self, rhs: Self, modulus: Self) -> Self {
        Self::narrow((self.widen() * rhs.widen()) % modulus.widen())
    }
}

macro_rules! impl_word {
    ($($word:ty => $wide:ty),+ $(,)?) => {
        $(
            impl Word for $word {
                type Wide = $wide;

                fn widen(self) -> Self::Wide {
                    self as $wide
                }

                fn narrow(wide: Self::Wide) -> Self {
                    debug_assert!(wide <= <$word>::MAX as $wide);
                    wide as $word
                }
            }
        )+
    };
}

impl_word!(u8 => u16, u16 => u32, u32 => u64, u64 => u128);
