//! Compression round-trips through a full walk
//!
//! Every method must reproduce the original bytes after decoding the literal
//! and decompressing it.

use b0x::{B0xError, Compression, Compressor, Custom, SharedConfig};
use std::fs;
use tempfile::TempDir;

fn text_tree() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("style.css"), "body { margin: 0; }\n".repeat(500)).unwrap();
    fs::write(dir.path().join("blob.bin"), (0..4096u32).map(|i| (i % 251) as u8).collect::<Vec<_>>()).unwrap();
    let root = b0x::custom::fix_path(&dir.path().to_string_lossy());
    (dir, root)
}

fn roundtrip(method: Compression) {
    println!("\n🔍 Testing {:?}...", method);

    let (dir, root) = text_tree();
    let bundle = Custom::new([root.as_str()])
        .with_base(root.as_str())
        .with_prefix("assets")
        .parse(&SharedConfig::new("out.rs").with_compression(method))
        .unwrap();

    for (name, original_len) in [("style.css", 10_000usize), ("blob.bin", 4096)] {
        let original = fs::read(dir.path().join(name)).unwrap();
        assert_eq!(original.len(), original_len);

        let file = bundle.get(&format!("assets/{}", name)).unwrap();
        let stored = file.decode().unwrap();
        let restored = method.decompress(&stored).unwrap();
        assert_eq!(restored, original, "{:?} corrupted {}", method, name);

        println!("  {} : {} -> {} bytes", name, original.len(), stored.len());
    }
}

#[test]
fn test_no_compression_roundtrip() {
    roundtrip(Compression::None);
}

#[test]
fn test_gzip_roundtrip() {
    roundtrip(Compression::gzip());
}

#[test]
fn test_gzip_level_range() {
    for level in 0..=9 {
        roundtrip(Compression::Gzip { level });
    }
}

#[test]
fn test_zstd_roundtrip() {
    roundtrip(Compression::zstd());
}

#[test]
fn test_lz4_roundtrip() {
    roundtrip(Compression::Lz4);
}

#[test]
fn test_compressed_text_is_smaller() {
    let (_dir, root) = text_tree();
    let custom = Custom::new([root.as_str()]).with_base(root.as_str()).with_prefix("a");

    let plain = custom.parse(&SharedConfig::new("out.rs")).unwrap();
    let packed = custom
        .parse(&SharedConfig::new("out.rs").with_compression(Compression::zstd()))
        .unwrap();

    let plain_len = plain.get("a/style.css").unwrap().data.len();
    let packed_len = packed.get("a/style.css").unwrap().data.len();
    assert!(packed_len * 10 < plain_len, "{} vs {}", packed_len, plain_len);
}

/// A compressor that always fails
struct Broken;

impl Compressor for Broken {
    fn compress(&self, _data: &[u8]) -> b0x::Result<Vec<u8>> {
        Err(B0xError::Compression("broken on purpose".to_string()))
    }
}

#[test]
fn test_compressor_failure_aborts_run() {
    let (_dir, root) = text_tree();
    let mut bundle = b0x::Bundle::new();

    let err = Custom::new([root.as_str()])
        .parse_with(&mut bundle, "out.rs", &Broken)
        .unwrap_err();

    assert!(matches!(err, B0xError::Compression(_)));
    assert!(bundle.is_empty());
}

/// A custom compressor: reverses the bytes
struct Reverse;

impl Compressor for Reverse {
    fn compress(&self, data: &[u8]) -> b0x::Result<Vec<u8>> {
        Ok(data.iter().rev().copied().collect())
    }
}

#[test]
fn test_custom_compressor_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), b"abc").unwrap();
    let root = b0x::custom::fix_path(&dir.path().to_string_lossy());

    let mut bundle = b0x::Bundle::new();
    Custom::new([root.as_str()])
        .with_base(root.as_str())
        .with_prefix("x")
        .parse_with(&mut bundle, "out.rs", &Reverse)
        .unwrap();

    assert_eq!(bundle.get("x/a.txt").unwrap().data, r#"b"\x63\x62\x61""#);
}
