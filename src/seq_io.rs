//! Reading and writing `u64` sequences.
//!
//! Two encodings are supported. Text is one or more decimal values per line,
//! separated by whitespace or commas, with `#` starting a comment. Binary is
//! a flat run of big-endian 64-bit words with no header.

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::Path;

const WORD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Binary,
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

pub fn read_text<R: BufRead>(r: R) -> io::Result<Vec<u64>> {
    let mut out = Vec::new();
    for (lineno, line) in r.lines().enumerate() {
        let line = line?;
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => &line,
        };
        for tok in line.split(|c: char| c.is_whitespace() || c == ',') {
            if tok.is_empty() {
                continue;
            }
            let v = tok
                .parse::<u64>()
                .map_err(|e| invalid(format!("line {}: {:?}: {}", lineno + 1, tok, e)))?;
            out.push(v);
        }
    }
    Ok(out)
}

pub fn write_text<W: Write>(w: W, seq: &[u64]) -> io::Result<()> {
    let mut w = BufWriter::new(w);
    for v in seq {
        writeln!(w, "{}", v)?;
    }
    w.flush()
}

/// Decodes big-endian words. The length must be a multiple of 8.
pub fn decode_binary(data: &[u8]) -> io::Result<Vec<u64>> {
    if data.len() % WORD_SIZE != 0 {
        return Err(invalid(format!(
            "binary input of {} bytes is not a whole number of {}-byte words",
            data.len(),
            WORD_SIZE
        )));
    }
    Ok(data.chunks_exact(WORD_SIZE).map(BigEndian::read_u64).collect())
}

pub fn read_binary<R: Read>(mut r: R) -> io::Result<Vec<u64>> {
    let mut data = Vec::new();
    r.read_to_end(&mut data)?;
    decode_binary(&data)
}

/// Maps a binary sequence file and decodes it.
pub fn map_binary_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u64>> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }
    let mmap = unsafe { Mmap::map(&file)? };
    decode_binary(&mmap)
}

pub fn write_binary<W: Write>(w: W, seq: &[u64]) -> io::Result<()> {
    let mut w = BufWriter::new(w);
    for &v in seq {
        w.write_u64::<BigEndian>(v)?;
    }
    w.flush()
}

pub fn read_file<P: AsRef<Path>>(path: P, format: Format) -> io::Result<Vec<u64>> {
    match format {
        Format::Text => read_text(io::BufReader::new(File::open(path)?)),
        Format::Binary => map_binary_file(path),
    }
}

pub fn read_stream<R: Read>(r: R, format: Format) -> io::Result<Vec<u64>> {
    match format {
        Format::Text => read_text(io::BufReader::new(r)),
        Format::Binary => read_binary(r),
    }
}

pub fn write_seq<W: Write>(w: W, seq: &[u64], format: Format) -> io::Result<()> {
    match format {
        Format::Text => write_text(w, seq),
        Format::Binary => write_binary(w, seq),
    }
}
