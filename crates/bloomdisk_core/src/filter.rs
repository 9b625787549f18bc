//! Disk-backed Bloom filter: derived bit positions against a persisted bit region.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::consts::{HASH_SEED, HDR_SIZE};
use crate::errors::Result;
use crate::header;
use crate::params::FilterParams;

/// A Bloom filter whose bit region lives in a single file.
///
/// `add` and `check` each open the backing file once, perform exactly
/// `hash_count` single-byte accesses against the bit region, and release the
/// handle on every exit path. The internal mutex serializes callers within
/// one process so the read-modify-write byte cycle cannot lose updates;
/// nothing guards against writers in other processes.
#[derive(Debug)]
pub struct DiskFilter {
    path: PathBuf,
    params: FilterParams,
    io_lock: Mutex<()>,
}

impl DiskFilter {
    /// Open (or create) the filter file for the given sizing.
    ///
    /// A new file is written as a 16-byte header followed by a zeroed bit
    /// region. An existing file must have been created with the same
    /// `entries` and `error_rate`; any disagreement fails with
    /// [`crate::FilterError::ConfigMismatch`] before the bit region is
    /// touched.
    pub fn open(path: impl AsRef<Path>, entries: i64, error_rate: f64) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let params = FilterParams::derive(entries, error_rate)?;

        if path.exists() {
            header::validate(&path, &params)?;
            debug!(path = %path.display(), entries, error_rate, "validated existing filter file");
        } else {
            header::create(&path, &params)?;
            debug!(
                path = %path.display(),
                total_bits = params.total_bits,
                hash_count = params.hash_count,
                "created filter file"
            );
        }

        Ok(Self {
            path,
            params,
            io_lock: Mutex::new(()),
        })
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// One digest, `hash_count` positions. When the digest is a multiple of
    /// `total_bits` every position collapses to bit 0 and accuracy degrades
    /// for that input; deriving all positions from a single hash accepts
    /// this.
    fn bit_indices(&self, data: &[u8]) -> impl Iterator<Item = u64> {
        let h = xxh3_64_with_seed(data, HASH_SEED);
        let m = self.params.total_bits;
        (0..self.params.hash_count as u64).map(move |i| h.wrapping_add(i.wrapping_mul(h)) % m)
    }

    /// Record `data` as seen.
    ///
    /// Sets every derived bit; a bit that is already set is skipped without a
    /// write. Not atomic across the `hash_count` sub-writes: an I/O error
    /// partway through leaves some bits set with no rollback, and the caller
    /// must not trust `check` for that input without re-adding successfully.
    pub fn add(&self, data: &[u8]) -> Result<()> {
        let _guard = self.io_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut f = OpenOptions::new().read(true).write(true).open(&self.path)?;
        for bit in self.bit_indices(data) {
            set_bit(&mut f, bit)?;
        }
        Ok(())
    }

    /// True when every derived bit is set, i.e. `data` was possibly added.
    ///
    /// Never false for data a successful `add` recorded in this file; true
    /// for other data with probability bounded by the configured
    /// `error_rate`.
    pub fn check(&self, data: &[u8]) -> Result<bool> {
        let _guard = self.io_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut f = File::open(&self.path)?;
        for bit in self.bit_indices(data) {
            if !get_bit(&mut f, bit)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[inline]
fn byte_addr(bit: u64) -> (u64, u8) {
    (bit / 8 + HDR_SIZE as u64, 1u8 << (bit % 8))
}

fn set_bit(f: &mut File, bit: u64) -> Result<()> {
    let (off, mask) = byte_addr(bit);
    let mut byte = [0u8; 1];
    f.seek(SeekFrom::Start(off))?;
    f.read_exact(&mut byte)?;
    if byte[0] & mask == 0 {
        f.seek(SeekFrom::Start(off))?;
        f.write_all(&[byte[0] | mask])?;
    }
    Ok(())
}

fn get_bit(f: &mut File, bit: u64) -> Result<bool> {
    let (off, mask) = byte_addr(bit);
    let mut byte = [0u8; 1];
    f.seek(SeekFrom::Start(off))?;
    f.read_exact(&mut byte)?;
    Ok(byte[0] & mask != 0)
}
