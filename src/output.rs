use crate::error::{Error, Result};

/// Copies `buf[..unique]` into a new vector of exactly `unique` elements.
pub fn build<W: Copy>(buf: &[W], unique: usize) -> Result<Vec<W>> {
    if unique > buf.len() {
        return Err(Error::PrefixOutOfRange {
            unique,
            len: buf.len(),
        });
    }
    let mut out = Vec::new();
    out.try_reserve_exact(unique)?;
    out.extend_from_slice(&buf[..unique]);
    Ok(out)
}
