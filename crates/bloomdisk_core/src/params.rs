use std::f64::consts::LN_2;

use crate::errors::{FilterError, Result};

/// Derived sizing for one filter instance. Computed once at open, never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub entries: i64,
    pub error_rate: f64,
    pub bits_per_entry: f64,
    pub total_bits: u64,
    pub total_bytes: u64,
    pub hash_count: u32,
}

impl FilterParams {
    // bits_per_entry = -ln(ε) / (ln2)^2 where ε is the target false positive
    // probability; hash_count = ceil(ln2 * bits_per_entry)
    pub fn derive(entries: i64, error_rate: f64) -> Result<Self> {
        if entries <= 0 {
            return Err(FilterError::InvalidConfig(format!(
                "entries must be positive, got {entries}"
            )));
        }
        if !(error_rate > 0.0 && error_rate < 1.0) {
            return Err(FilterError::InvalidConfig(format!(
                "error_rate must be strictly between 0 and 1, got {error_rate}"
            )));
        }

        let bits_per_entry = -error_rate.ln() / (LN_2 * LN_2);
        let total_bits = (entries as f64 * bits_per_entry) as u64;
        if total_bits == 0 {
            return Err(FilterError::InvalidConfig(format!(
                "{entries} entries at rate {error_rate} derive a zero-bit region"
            )));
        }
        let total_bytes = (total_bits + 7) / 8;
        let hash_count = (LN_2 * bits_per_entry).ceil() as u32;

        Ok(Self {
            entries,
            error_rate,
            bits_per_entry,
            total_bits,
            total_bytes,
            hash_count,
        })
    }
}
