use crate::config::{load_limit, validate_capacity, validate_max_load};
use crate::error::{Error, Result};
use crate::hash::SlotHasher;
use crate::word::Word;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot<W> {
    Empty,
    Occupied(W),
}

/// Outcome of [`ProbeTable::lookup_or_insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    AlreadyPresent,
    Inserted,
}

/// Write-only open-addressing set with linear probing.
///
/// At most `limit` distinct values are admitted. Once the limit is reached,
/// inserting a new value fails with [`Error::CapacityExceeded`] and leaves
/// the table unchanged. Values already present are still reported.
pub struct ProbeTable<W, H> {
    slots: Vec<Slot<W>>,
    len: usize,
    limit: usize,
    probes: u64,
    hasher: H,
}

impl<W: Word, H: SlotHasher> ProbeTable<W, H> {
    pub fn new(capacity: usize, max_load: f64, hasher: H) -> Result<Self> {
        validate_capacity(capacity)?;
        validate_max_load(max_load)?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, Slot::Empty);
        Ok(Self {
            slots,
            len: 0,
            limit: load_limit(capacity, max_load),
            probes: 0,
            hasher,
        })
    }

    pub fn reset(&mut self) {
        self.slots.fill(Slot::Empty);
        self.len = 0;
        self.probes = 0;
    }

    #[inline(always)]
    fn home(&self, v: W) -> usize {
        (self.hasher.hash(v.fold()) % self.slots.len() as u64) as usize
    }

    /// Walks the probe chain for `v`. Returns the slot holding `v`, or the
    /// first empty slot of the chain, or `None` if every slot was visited.
    fn find(&mut self, v: W) -> Option<usize> {
        let cap = self.slots.len();
        let mut i = self.home(v);
        for _ in 0..cap {
            self.probes += 1;
            match self.slots[i] {
                Slot::Empty => return Some(i),
                Slot::Occupied(x) if x == v => return Some(i),
                Slot::Occupied(_) => {
                    i += 1;
                    if i == cap {
                        i = 0;
                    }
                }
            }
        }
        None
    }

    fn exceeded(&self) -> Error {
        Error::CapacityExceeded {
            capacity: self.slots.len(),
            limit: self.limit,
        }
    }

    pub fn lookup_or_insert(&mut self, v: W) -> Result<Probe> {
        let Some(i) = self.find(v) else {
            return Err(self.exceeded());
        };
        if let Slot::Occupied(_) = self.slots[i] {
            return Ok(Probe::AlreadyPresent);
        }
        if self.len == self.limit {
            log::warn!("probe table full: {} of {} slots in use", self.len, self.slots.len());
            return Err(self.exceeded());
        }
        self.slots[i] = Slot::Occupied(v);
        self.len += 1;
        Ok(Probe::Inserted)
    }

    pub fn contains(&self, v: W) -> bool {
        let cap = self.slots.len();
        let mut i = self.home(v);
        for _ in 0..cap {
            match self.slots[i] {
                Slot::Empty => return false,
                Slot::Occupied(x) if x == v => return true,
                Slot::Occupied(_) => i = (i + 1) % cap,
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Total slots inspected by `lookup_or_insert` since creation or reset.
    pub fn probes(&self) -> u64 {
        self.probes
    }
}
