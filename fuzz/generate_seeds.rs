//! Generate seed corpus for fuzzing

use b0x::literal;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let corpus_dir = "fuzz/corpus/fuzz_literal_decode";
    fs::create_dir_all(corpus_dir)?;

    println!("Generating seed corpus...");

    let seeds: [(&str, Vec<u8>); 5] = [
        ("empty", Vec::new()),
        ("text", b"Hello, World!".to_vec()),
        ("binary", (0..=255u8).collect()),
        ("literal_valid", literal::encode(b"seed").into_bytes()),
        ("literal_truncated", b"b\"\\x6".to_vec()),
    ];

    for (name, data) in seeds {
        let path = format!("{}/seed_{}", corpus_dir, name);
        fs::write(&path, data)?;
        println!("✓ Generated: {}", path);
    }

    println!("\n✓ Seed corpus generated successfully");
    Ok(())
}
