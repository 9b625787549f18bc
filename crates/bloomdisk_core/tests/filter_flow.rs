use bloomdisk_core::{DiskFilter, FilterError, HDR_SIZE};
use tempfile::tempdir;

#[test]
fn full_flow_survives_reopen() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("flow.bloom");

    let filter = DiskFilter::open(&path, 10_000, 0.01).unwrap();
    let keys: Vec<String> = (0..50).map(|i| format!("key-{i}")).collect();
    for key in &keys {
        filter.add(key.as_bytes()).unwrap();
    }
    for key in &keys {
        assert!(filter.check(key.as_bytes()).unwrap());
    }
    drop(filter);

    let reopened = DiskFilter::open(&path, 10_000, 0.01).unwrap();
    for key in &keys {
        assert!(reopened.check(key.as_bytes()).unwrap(), "{key} lost across reopen");
    }
}

#[test]
fn reopen_with_different_config_fails_fast() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("flow.bloom");

    let filter = DiskFilter::open(&path, 10_000, 0.01).unwrap();
    filter.add(b"sentinel").unwrap();
    let len_before = std::fs::metadata(&path).unwrap().len();
    drop(filter);

    let err = DiskFilter::open(&path, 20_000, 0.01).unwrap_err();
    assert!(matches!(err, FilterError::ConfigMismatch { field: "entries", .. }));

    let err = DiskFilter::open(&path, 10_000, 0.001).unwrap_err();
    assert!(matches!(
        err,
        FilterError::ConfigMismatch {
            field: "error_rate",
            ..
        }
    ));

    // rejected opens never touch the file
    assert_eq!(std::fs::metadata(&path).unwrap().len(), len_before);
    let survivor = DiskFilter::open(&path, 10_000, 0.01).unwrap();
    assert!(survivor.check(b"sentinel").unwrap());
}

#[test]
fn file_length_matches_derived_layout() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("flow.bloom");

    let filter = DiskFilter::open(&path, 1_000_000, 0.001).unwrap();
    assert_eq!(
        std::fs::metadata(&path).unwrap().len(),
        HDR_SIZE as u64 + filter.params().total_bytes
    );
    assert_eq!(filter.params().total_bytes, 1_797_199);
}

#[test]
fn bad_params_fail_before_any_file_access() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("never-created.bloom");

    assert!(matches!(
        DiskFilter::open(&path, 0, 0.01).unwrap_err(),
        FilterError::InvalidConfig(_)
    ));
    assert!(matches!(
        DiskFilter::open(&path, 1_000, 2.0).unwrap_err(),
        FilterError::InvalidConfig(_)
    ));
    assert!(!path.exists());
}
