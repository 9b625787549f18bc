pub mod consts;
pub mod errors;
pub mod filter;
pub mod header;
pub mod params;

pub use consts::{HASH_SEED, HDR_SIZE};
pub use errors::{FilterError, Result};
pub use filter::DiskFilter;
pub use params::FilterParams;
