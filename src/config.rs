use crate::error::{Error, Result};
use crate::hash::HashKind;

/// Prime slot count used by [`Capacity::fixed_default`].
pub const DEFAULT_FIXED_CAPACITY: usize = 4099;

const MIN_SCALED_CAPACITY: usize = 2;

/// How the probe table is sized for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Capacity {
    /// Next prime >= twice the input length.
    #[default]
    Scaled,
    /// Exactly this many slots, regardless of input length.
    Fixed(usize),
}

impl Capacity {
    pub fn fixed_default() -> Self {
        Capacity::Fixed(DEFAULT_FIXED_CAPACITY)
    }

    /// Slot count for an input of `len` elements.
    ///
    /// A scaled table is the smallest prime >= `2 * len` whose load limit
    /// under `max_load` still admits `len` distinct values.
    pub fn resolve(&self, len: usize, max_load: f64) -> usize {
        match *self {
            Capacity::Fixed(n) => n,
            Capacity::Scaled => {
                let mut cap = next_prime(len.saturating_mul(2).max(MIN_SCALED_CAPACITY));
                let wanted = (len as f64 / max_load).ceil();
                if wanted.is_finite() && wanted > cap as f64 {
                    cap = next_prime(wanted as usize);
                }
                if validate_max_load(max_load).is_err() {
                    return cap;
                }
                while load_limit(cap, max_load) < len && cap < usize::MAX {
                    cap = next_prime(cap + 1);
                }
                cap
            }
        }
    }
}

/// Parameters for a deduplication run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub capacity: Capacity,
    /// Fraction of slots that may be occupied, in `(0, 1]`.
    pub max_load: f64,
    pub hash: HashKind,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: Capacity::Scaled,
            max_load: 1.0,
            hash: HashKind::Mix,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn max_load(mut self, max_load: f64) -> Self {
        self.max_load = max_load;
        self
    }

    pub fn hash(mut self, hash: HashKind) -> Self {
        self.hash = hash;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Capacity::Fixed(n) = self.capacity {
            validate_capacity(n)?;
        }
        validate_max_load(self.max_load)
    }
}

pub fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(Error::InvalidConfig("capacity must be at least 1".into()));
    }
    Ok(())
}

pub fn validate_max_load(max_load: f64) -> Result<()> {
    if !(max_load > 0.0 && max_load <= 1.0) {
        return Err(Error::InvalidConfig(format!("max load {} is outside (0, 1]", max_load)));
    }
    Ok(())
}

/// Number of distinct values a table of `capacity` slots admits.
pub fn load_limit(capacity: usize, max_load: f64) -> usize {
    ((capacity as f64 * max_load) as usize).clamp(1, capacity.max(1))
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Smallest prime >= `n`. Saturates at `usize::MAX` rather than overflowing.
pub fn next_prime(n: usize) -> usize {
    let mut p = n.max(2);
    while !is_prime(p) {
        match p.checked_add(1) {
            Some(next) => p = next,
            None => return usize::MAX,
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_prime_small_values() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(14), 17);
        assert_eq!(next_prime(4096), 4099);
    }

    #[test]
    fn default_fixed_capacity_is_prime() {
        assert!(is_prime(DEFAULT_FIXED_CAPACITY));
    }

    #[test]
    fn scaled_capacity_is_at_least_twice_len() {
        assert_eq!(Capacity::Scaled.resolve(0, 1.0), 2);
        assert_eq!(Capacity::Scaled.resolve(1, 1.0), 2);
        assert_eq!(Capacity::Scaled.resolve(6, 1.0), 13);
        assert_eq!(Capacity::Fixed(7).resolve(1000, 0.1), 7);
    }

    #[test]
    fn scaled_capacity_grows_for_low_load() {
        let cap = Capacity::Scaled.resolve(100, 0.25);
        assert!(cap >= 400);
        assert!(load_limit(cap, 0.25) >= 100);
        for len in [1, 2, 3, 10, 999, 4097] {
            for load in [0.01, 0.1, 1.0 / 3.0, 0.49, 0.5, 0.7, 1.0] {
                let cap = Capacity::Scaled.resolve(len, load);
                assert!(load_limit(cap, load) >= len, "len {} load {}", len, load);
            }
        }
    }

    #[test]
    fn load_limit_admits_at_least_one() {
        assert_eq!(load_limit(3, 0.01), 1);
        assert_eq!(load_limit(10, 0.5), 5);
        assert_eq!(load_limit(7, 1.0), 7);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(Config::new().validate().is_ok());
        assert!(Config::new().capacity(Capacity::Fixed(0)).validate().is_err());
        assert!(Config::new().max_load(0.0).validate().is_err());
        assert!(Config::new().max_load(1.5).validate().is_err());
        assert!(Config::new().max_load(f64::NAN).validate().is_err());
        assert!(Config::new().max_load(0.5).validate().is_ok());
    }
}
