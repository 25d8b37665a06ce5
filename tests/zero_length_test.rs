//! Zero-length files still produce a valid, empty literal

use b0x::{Compression, Custom, SharedConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_zero_length_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), b"").unwrap();
    fs::write(dir.path().join("regular.txt"), b"Hello, World!").unwrap();
    let root = b0x::custom::fix_path(&dir.path().to_string_lossy());

    let bundle = Custom::new([root.as_str()])
        .with_base(root.as_str())
        .with_prefix("data")
        .parse(&SharedConfig::new("out.rs"))
        .unwrap();

    assert_eq!(bundle.len(), 2);

    let empty = bundle.get("data/empty.txt").unwrap();
    assert_eq!(empty.data, r#"b"""#);
    assert!(empty.decode().unwrap().is_empty());

    let regular = bundle.get("data/regular.txt").unwrap();
    assert_eq!(regular.decode().unwrap(), b"Hello, World!");
}

#[test]
fn test_zero_length_file_compressed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), b"").unwrap();
    let root = b0x::custom::fix_path(&dir.path().to_string_lossy());

    for method in [Compression::gzip(), Compression::zstd(), Compression::Lz4] {
        let bundle = Custom::new([root.as_str()])
            .with_base(root.as_str())
            .with_prefix("data")
            .parse(&SharedConfig::new("out.rs").with_compression(method))
            .unwrap();

        let stored = bundle.get("data/empty.txt").unwrap().decode().unwrap();
        assert!(method.decompress(&stored).unwrap().is_empty(), "{:?}", method);
    }
}

#[test]
fn test_empty_directory_registers_nothing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    let root = b0x::custom::fix_path(&dir.path().to_string_lossy());

    let bundle = Custom::new([root.as_str()])
        .parse(&SharedConfig::new("out.rs"))
        .unwrap();

    assert!(bundle.is_empty());
    assert!(bundle.dirs.is_empty());
}
