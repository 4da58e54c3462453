//! Slot hash functions for the probe table.

/// Maps a folded value to a 64-bit hash. The table reduces it modulo its
/// capacity.
pub trait SlotHasher {
    fn hash(&self, x: u64) -> u64;
}

/// Uses the value itself. Matches plain `value mod capacity` placement and
/// clusters badly on strided input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl SlotHasher for Identity {
    #[inline(always)]
    fn hash(&self, x: u64) -> u64 {
        x
    }
}

/// SplitMix64 finalizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mix;

impl SlotHasher for Mix {
    #[inline(always)]
    fn hash(&self, x: u64) -> u64 {
        let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Hash function selector carried in [`crate::Config`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashKind {
    #[default]
    Mix,
    Identity,
}

impl SlotHasher for HashKind {
    #[inline(always)]
    fn hash(&self, x: u64) -> u64 {
        match self {
            HashKind::Mix => Mix.hash(x),
            HashKind::Identity => Identity.hash(x),
        }
    }
}
