// crates/bloomdisk_core/src/consts.rs

/// Persisted header: entries (i64 LE) + error_rate (f64 LE).
pub const HDR_SIZE: usize = 16;

/// Fixed seed mixed into every digest so the filter's hashing stays
/// decorrelated from unrelated xxh3 uses of the same input.
pub const HASH_SEED: u64 = 0x32c1565a65b53543;

const _: () = { assert!(HDR_SIZE == 8 + 8); };
