//! Fixed-width unsigned element types accepted by the deduplicator.

use std::fmt::Debug;

/// An unsigned integer of fixed width.
///
/// `fold` reduces the value to 64 bits for hashing. Wider types mix their
/// halves so that values differing only in the high bits still spread
/// across the table.
pub trait Word: Copy + Eq + Debug {
    fn fold(self) -> u64;
}

macro_rules! impl_word_narrow {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                #[inline(always)]
                fn fold(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_word_narrow!(u8, u16, u32, u64, usize);

impl Word for u128 {
    #[inline(always)]
    fn fold(self) -> u64 {
        (self as u64) ^ ((self >> 64) as u64).rotate_left(32)
    }
}

#[cfg(test)]
mod tests {
    use super::Word;

    #[test]
    fn narrow_types_fold_to_themselves() {
        assert_eq!(0u8.fold(), 0);
        assert_eq!(u16::MAX.fold(), u16::MAX as u64);
        assert_eq!(u64::MAX.fold(), u64::MAX);
    }

    #[test]
    fn wide_fold_sees_high_bits() {
        let low = 5u128;
        let high = (5u128 << 64) | 5;
        assert_ne!(low.fold(), high.fold());
    }
}
