//! End-to-end coverage of the two file I/O functions over both bundled
//! backends: byte fidelity, the null-result convention, overwrite
//! semantics, the size quota, and VFS resolution.

use proptest::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;
use vfsio_rs::vfs::{LocalVfs, MemoryVfs, VfsRegistry};
use vfsio_rs::{read_file, write_file, Engine, FileIoError, Value};

fn memory_engine() -> (Engine, Arc<MemoryVfs>) {
    let vfs = Arc::new(MemoryVfs::new("mem"));
    let mut registry = VfsRegistry::new();
    registry.register(Arc::clone(&vfs) as Arc<dyn vfsio_rs::Vfs>);
    (Engine::new(registry), vfs)
}

fn local_engine() -> (Engine, TempDir) {
    let temp = TempDir::new().unwrap();
    let mut registry = VfsRegistry::new();
    registry.register(Arc::new(LocalVfs::new("local")));
    (Engine::new(registry), temp)
}

#[test]
fn test_round_trip_memory() {
    let (engine, _) = memory_engine();

    write_file(&engine, "/doc", b"round trip payload", None).unwrap();
    let content = read_file(&engine, "/doc", None).unwrap().unwrap();
    assert_eq!(content, b"round trip payload");
}

#[test]
fn test_round_trip_local_disk() {
    let (engine, temp) = local_engine();
    let path = temp.path().join("doc.bin");
    let path = path.to_str().unwrap();

    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let written = write_file(&engine, path, &payload, None).unwrap();
    assert_eq!(written, 4096);

    let content = read_file(&engine, path, None).unwrap().unwrap();
    assert_eq!(content, payload);
}

#[test]
fn test_round_trip_empty_payload() {
    let (engine, _) = memory_engine();

    assert_eq!(write_file(&engine, "/empty", b"", None).unwrap(), 0);
    assert_eq!(read_file(&engine, "/empty", None).unwrap(), Some(Vec::new()));
}

#[test]
fn test_missing_file_reads_null_on_both_backends() {
    let (engine, _) = memory_engine();
    assert!(read_file(&engine, "/nowhere", None).unwrap().is_none());

    let (engine, temp) = local_engine();
    let path = temp.path().join("nowhere.bin");
    assert!(read_file(&engine, path.to_str().unwrap(), None)
        .unwrap()
        .is_none());
}

#[test]
fn test_overwrite_fully_replaces_longer_content() {
    let (engine, _) = memory_engine();

    write_file(&engine, "/f", b"the original, much longer content", None).unwrap();
    write_file(&engine, "/f", b"new", None).unwrap();

    // Truncate-before-write: never a mix of old and new bytes.
    assert_eq!(read_file(&engine, "/f", None).unwrap().unwrap(), b"new");
}

#[test]
fn test_overwrite_on_local_disk() {
    let (engine, temp) = local_engine();
    let path = temp.path().join("replace.bin");
    let path = path.to_str().unwrap();

    write_file(&engine, path, &vec![0xAAu8; 1000], None).unwrap();
    write_file(&engine, path, &vec![0xBBu8; 10], None).unwrap();

    assert_eq!(read_file(&engine, path, None).unwrap().unwrap(), vec![0xBBu8; 10]);
}

#[test]
fn test_oversized_file_is_too_big_not_truncated() {
    let (engine, vfs) = memory_engine();
    let engine = engine.with_max_result_size(10);
    vfs.insert("/big", vec![1u8; 11]);

    match read_file(&engine, "/big", None) {
        Err(FileIoError::TooBig { size, limit }) => {
            assert_eq!((size, limit), (11, 10));
        }
        other => panic!("expected TooBig, got {:?}", other),
    }
}

#[test]
fn test_unregistered_vfs_fails_without_touching_files() {
    let (engine, temp) = local_engine();
    let path = temp.path().join("never-created.bin");
    let path_str = path.to_str().unwrap();

    assert!(matches!(
        write_file(&engine, path_str, b"data", Some("nope")),
        Err(FileIoError::VfsNotFound(_))
    ));
    // Resolution failed before any open, so nothing was created.
    assert!(!path.exists());

    assert!(matches!(
        read_file(&engine, path_str, Some("nope")),
        Err(FileIoError::VfsNotFound(_))
    ));
}

#[test]
fn test_host_function_round_trip() {
    let (engine, _) = memory_engine();

    let write_args = [
        Value::Text("/via-host".to_string()),
        Value::Blob(b"host payload".to_vec()),
        Value::Text("mem".to_string()),
    ];
    assert_eq!(
        vfsio_rs::vfswritefile(&engine, &write_args).unwrap(),
        Value::Integer(12)
    );

    let read_args = [Value::Text("/via-host".to_string())];
    assert_eq!(
        vfsio_rs::vfsreadfile(&engine, &read_args).unwrap(),
        Value::Blob(b"host payload".to_vec())
    );
}

proptest! {
    #[test]
    fn prop_write_then_read_is_identity(payload in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let (engine, _) = memory_engine();

        let written = write_file(&engine, "/prop", &payload, None).unwrap();
        prop_assert_eq!(written, payload.len() as u64);

        let content = read_file(&engine, "/prop", None).unwrap().unwrap();
        prop_assert_eq!(content, payload);
    }
}
