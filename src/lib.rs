//! Order-preserving deduplication of fixed-width unsigned integer sequences.
//!
//! ```
//! assert_eq!(uniquify::uniquify(&[1u64, 2, 1, 3, 2, 4]).unwrap(), vec![1, 2, 3, 4]);
//! ```

pub mod compact;
pub mod config;
pub mod error;
pub mod hash;
pub mod output;
pub mod probe_table;
pub mod seq_io;
pub mod word;

pub use compact::Compaction;
pub use config::{Capacity, Config};
pub use error::{Error, Result};
pub use hash::HashKind;
pub use word::Word;

/// Deduplicates `input` with the default configuration. `input` is not
/// modified.
pub fn uniquify<W: Word>(input: &[W]) -> Result<Vec<W>> {
    uniquify_with(input, &Config::default())
}

pub fn uniquify_with<W: Word>(input: &[W], config: &Config) -> Result<Vec<W>> {
    Uniquifier::new(*config).run(input)
}

/// Compacts `buf` in place and returns the length of its unique prefix.
/// The contents past the prefix are unspecified afterwards.
pub fn uniquify_in_place<W: Word>(buf: &mut [W], config: &Config) -> Result<usize> {
    Uniquifier::new(*config).run_in_place(buf)
}

pub fn uniquify_vec<W: Word>(v: Vec<W>, config: &Config) -> Result<Vec<W>> {
    Uniquifier::new(*config).run_vec(v)
}

/// Reusable holder for a deduplication [`Config`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Uniquifier {
    config: Config,
}

impl Uniquifier {
    pub fn new(config: Config) -> Self {
        Uniquifier { config }
    }

    pub fn capacity(mut self, capacity: Capacity) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn max_load(mut self, max_load: f64) -> Self {
        self.config.max_load = max_load;
        self
    }

    pub fn hash(mut self, hash: HashKind) -> Self {
        self.config.hash = hash;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs compaction on `buf` and logs the outcome.
    pub fn compact<W: Word>(&self, buf: &mut [W]) -> Result<Compaction> {
        let c = compact::compact(buf, &self.config)?;
        log::debug!(
            "compacted {} elements to {} ({} probes, {} slots)",
            c.len,
            c.unique,
            c.probes,
            c.table_capacity
        );
        Ok(c)
    }

    /// Deduplicates a working copy of `input`.
    pub fn run<W: Word>(&self, input: &[W]) -> Result<Vec<W>> {
        let mut work = Vec::new();
        work.try_reserve_exact(input.len())?;
        work.extend_from_slice(input);
        self.run_vec(work)
    }

    pub fn run_in_place<W: Word>(&self, buf: &mut [W]) -> Result<usize> {
        Ok(self.compact(buf)?.unique)
    }

    /// Deduplicates an owned vector. Returns it as is when it had no
    /// duplicates, otherwise a new vector of exactly the unique length.
    pub fn run_vec<W: Word>(&self, mut v: Vec<W>) -> Result<Vec<W>> {
        let c = self.compact(&mut v)?;
        if c.is_unique() {
            return Ok(v);
        }
        output::build(&v, c.unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_left_alone() {
        let input = vec![3u64, 3, 1, 3];
        let out = uniquify(&input).unwrap();
        assert_eq!(out, vec![3, 1]);
        assert_eq!(input, vec![3, 3, 1, 3]);
    }

    #[test]
    fn in_place_reports_prefix() {
        let mut buf = [2u16, 0, 2, 0, 7];
        let n = uniquify_in_place(&mut buf, &Config::default()).unwrap();
        assert_eq!(&buf[..n], &[2, 0, 7]);
    }

    #[test]
    fn vec_without_duplicates_is_returned_as_is() {
        let v = vec![1u32, 2, 3];
        let ptr = v.as_ptr();
        let out = uniquify_vec(v, &Config::default()).unwrap();
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn vec_with_duplicates_is_exact_size() {
        let v = vec![1u32, 1, 2, 1, 2, 3];
        let out = uniquify_vec(v, &Config::default()).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(out.capacity(), 3);
    }

    #[test]
    fn builder_overrides_config() {
        let u = Uniquifier::default()
            .capacity(Capacity::Fixed(3))
            .max_load(1.0)
            .hash(HashKind::Identity);
        assert_eq!(u.config().capacity, Capacity::Fixed(3));
        assert_eq!(u.run(&[1u64, 2, 1, 3]).unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            u.run(&[1u64, 2, 3, 4]),
            Err(Error::CapacityExceeded { .. })
        ));
    }
}
