//! On-disk configuration record (LE, 16 bytes):
//!   entries[8]    = i64
//!   error_rate[8] = f64 (IEEE754)
//!
//! Written once when the file is created, read and compared once on every
//! later open. The bit region follows immediately and is zero on creation.

use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::consts::HDR_SIZE;
use crate::errors::{FilterError, Result};
use crate::params::FilterParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    pub entries: i64,
    pub error_rate: f64,
}

impl Header {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_i64::<LE>(self.entries)?;
        w.write_f64::<LE>(self.error_rate)
    }

    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let entries = r.read_i64::<LE>()?;
        let error_rate = r.read_f64::<LE>()?;
        Ok(Self {
            entries,
            error_rate,
        })
    }

    /// Exact comparison against a freshly derived config. `error_rate` is
    /// compared bit-for-bit, no epsilon.
    pub fn matches(&self, params: &FilterParams) -> Result<()> {
        if self.entries != params.entries {
            return Err(FilterError::ConfigMismatch {
                field: "entries",
                stored: self.entries.to_string(),
                requested: params.entries.to_string(),
            });
        }
        if self.error_rate.to_bits() != params.error_rate.to_bits() {
            return Err(FilterError::ConfigMismatch {
                field: "error_rate",
                stored: self.error_rate.to_string(),
                requested: params.error_rate.to_string(),
            });
        }
        Ok(())
    }
}

/// Create the filter file: header followed by `total_bytes` zero bytes.
pub fn create(path: &Path, params: &FilterParams) -> Result<()> {
    let mut f = File::create(path)?;
    Header {
        entries: params.entries,
        error_rate: params.error_rate,
    }
    .write_to(&mut f)?;
    f.set_len(HDR_SIZE as u64 + params.total_bytes)?;
    f.sync_all()?;
    Ok(())
}

/// Validate an existing file against a freshly derived config. Fails before
/// any bit region access: first on a header mismatch, then on a file whose
/// length does not fit the derived layout.
pub fn validate(path: &Path, params: &FilterParams) -> Result<()> {
    let mut f = File::open(path)?;
    let stored = Header::read_from(&mut f)?;
    stored.matches(params)?;

    let want = HDR_SIZE as u64 + params.total_bytes;
    let got = f.metadata()?.len();
    if got != want {
        return Err(FilterError::Corrupt(format!(
            "file is {got} bytes, derived layout needs {want}"
        )));
    }
    Ok(())
}
