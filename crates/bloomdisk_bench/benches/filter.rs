use bloomdisk_core::DiskFilter;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

fn bench_filter(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let filter = DiskFilter::open(dir.path().join("bench.bloom"), 100_000, 0.01).expect("open");
    for i in 0..1_000u64 {
        filter.add(&i.to_le_bytes()).expect("add");
    }

    c.bench_function("add", |b| {
        let mut i = 1_000u64;
        b.iter(|| {
            i += 1;
            filter.add(black_box(&i.to_le_bytes())).expect("add")
        })
    });
    c.bench_function("check_hit", |b| {
        b.iter(|| black_box(filter.check(&42u64.to_le_bytes()).expect("check")))
    });
    c.bench_function("check_miss", |b| {
        b.iter(|| black_box(filter.check(b"never added").expect("check")))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
