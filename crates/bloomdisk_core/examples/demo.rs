use anyhow::Result;
use bloomdisk_core::DiskFilter;

fn main() -> Result<()> {
    let filter = DiskFilter::open("bloom.bin", 1_000_000, 0.001)?;
    filter.add(b"example data")?;

    println!("{}", filter.check(b"example data")?); // true
    println!("{}", filter.check(b"some other data")?); // false with probability ~0.999
    Ok(())
}
