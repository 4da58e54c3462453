//! Single-pass, order-preserving, in-place deduplication.
//!
//! After [`compact`] returns, `buf[..unique]` holds the first occurrence of
//! every distinct value in input order. Positions past `unique` are left in
//! an unspecified state.

use crate::config::Config;
use crate::error::Result;
use crate::hash::SlotHasher;
use crate::probe_table::{Probe, ProbeTable};
use crate::word::Word;

/// Summary of one compaction run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compaction {
    /// Length of the unique prefix.
    pub unique: usize,
    /// Length of the buffer that was compacted.
    pub len: usize,
    /// Slots inspected in the probe table. Zero when no table was needed.
    pub probes: u64,
    /// Slots allocated for the probe table. Zero when no table was needed.
    pub table_capacity: usize,
}

impl Compaction {
    fn trivial(len: usize, unique: usize) -> Self {
        Compaction {
            unique,
            len,
            probes: 0,
            table_capacity: 0,
        }
    }

    /// True when the input had no duplicates and the buffer is unchanged.
    pub fn is_unique(&self) -> bool {
        self.unique == self.len
    }

    pub fn duplicates(&self) -> usize {
        self.len - self.unique
    }
}

/// Length of the leading run of elements equal to `buf[0]`.
fn leading_run<W: Word>(buf: &[W]) -> usize {
    let first = buf[0];
    buf.iter().take_while(|&&x| x == first).count()
}

/// Compacts `buf` using a probe table sized from `config`.
pub fn compact<W: Word>(buf: &mut [W], config: &Config) -> Result<Compaction> {
    config.validate()?;
    let len = buf.len();
    if len <= 1 {
        return Ok(Compaction::trivial(len, len));
    }
    if leading_run(buf) == len {
        log::trace!("all {} elements equal, skipping probe table", len);
        return Ok(Compaction::trivial(len, 1));
    }

    let capacity = config.capacity.resolve(len, config.max_load);
    log::trace!("probe table: {} slots for {} elements", capacity, len);
    let mut table = ProbeTable::new(capacity, config.max_load, config.hash)?;
    compact_with_table(buf, &mut table)
}

/// Compacts `buf` against a caller-supplied table.
///
/// The table should be empty; values already recorded in it are treated as
/// seen, except `buf[0]`, which is always kept.
pub fn compact_with_table<W: Word, H: SlotHasher>(
    buf: &mut [W],
    table: &mut ProbeTable<W, H>,
) -> Result<Compaction> {
    let len = buf.len();
    if len <= 1 {
        return Ok(Compaction::trivial(len, len));
    }
    let run = leading_run(buf);
    if run == len {
        return Ok(Compaction::trivial(len, 1));
    }

    table.lookup_or_insert(buf[0])?;
    let mut write = 1;
    let mut prev = buf[0];
    for read in run..len {
        let v = buf[read];
        if v == prev {
            continue;
        }
        prev = v;
        if table.lookup_or_insert(v)? == Probe::Inserted {
            if write != read {
                buf[write] = v;
            }
            write += 1;
        }
    }

    Ok(Compaction {
        unique: write,
        len,
        probes: table.probes(),
        table_capacity: table.capacity(),
    })
}
