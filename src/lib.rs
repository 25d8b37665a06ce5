//! b0x: embed files into generated Rust source
//!
//! This library turns files on disk into escaped byte-string literals that a
//! code generator can write into a source file, so the compiled binary carries
//! its assets without touching the filesystem at runtime. For every discovered
//! file it:
//! - Maps the real path to a virtual path (base stripped, prefix substituted)
//! - Drops files matched by exclusion globs, and the generated artifact itself
//! - Applies ordered literal substring replacements to matching files
//! - Optionally compresses the content (gzip/zstd/LZ4)
//! - Encodes the bytes as a `b"\xHH..."` literal
//!
//! # Example
//!
//! ```no_run
//! use b0x::Config;
//!
//! let config = Config::from_file("b0x.toml")?;
//! let bundle = config.bundle()?;
//!
//! for dir in bundle.dirs.iter() {
//!     println!("dir  {}", dir);
//! }
//! for file in bundle.files.iter() {
//!     println!("file {} = {}", file.path, file.data);
//! }
//! # Ok::<(), b0x::error::B0xError>(())
//! ```

// Core modules
pub mod bundle;
pub mod compression;
pub mod config;
pub mod custom;
pub mod error;
pub mod literal;

// Re-export commonly used types
pub use bundle::{Bundle, DirSet, FileMap, VirtualFile};
pub use compression::{Compression, Compressor};
pub use config::Config;
pub use custom::{Custom, Replacer, SharedConfig};
pub use error::{B0xError, Result};
