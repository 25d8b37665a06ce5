//! Compression applied to file content before it is encoded.
//!
//! The transformation core only sees the [`Compressor`] trait, so any byte
//! transform can be plugged in. [`Compression`] is the configurable built-in
//! implementation and also knows how to reverse itself, which is what a
//! runtime reader of the generated literals needs.

use crate::error::{B0xError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Default gzip level (matches `flate2::Compression::default()`)
pub const DEFAULT_GZIP_LEVEL: u32 = 6;

/// Default zstd level (balanced compression)
pub const DEFAULT_ZSTD_LEVEL: i32 = 6;

/// A byte transform applied to each file's content after substitution
pub trait Compressor {
    /// Transform the content. May change its length and may fail.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Whether this compressor does anything at all.
    ///
    /// A disabled compressor is skipped and the content passes through
    /// without being copied.
    fn enabled(&self) -> bool {
        true
    }
}

/// Built-in compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum Compression {
    /// Content is embedded as-is
    #[default]
    None,
    /// Gzip stream, level 0-9
    Gzip {
        #[serde(default = "default_gzip_level")]
        level: u32,
    },
    /// Zstd frame, level 1-22
    Zstd {
        #[serde(default = "default_zstd_level")]
        level: i32,
    },
    /// LZ4 block with the uncompressed size prepended
    Lz4,
}

fn default_gzip_level() -> u32 {
    DEFAULT_GZIP_LEVEL
}

fn default_zstd_level() -> i32 {
    DEFAULT_ZSTD_LEVEL
}

impl Compression {
    /// Gzip at the default level
    pub fn gzip() -> Self {
        Self::Gzip {
            level: DEFAULT_GZIP_LEVEL,
        }
    }

    /// Zstd at the default level
    pub fn zstd() -> Self {
        Self::Zstd {
            level: DEFAULT_ZSTD_LEVEL,
        }
    }

    /// Check that the configured level is in range for the method
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Gzip { level } if level > 9 => Err(B0xError::Config(format!(
                "gzip level must be between 0 and 9, got {}",
                level
            ))),
            Self::Zstd { level } if !zstd::compression_level_range().contains(&level) => {
                Err(B0xError::Config(format!(
                    "zstd level {} is out of range {:?}",
                    level,
                    zstd::compression_level_range()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Reverse [`Compressor::compress`] for this method
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match *self {
            Self::None => Ok(data.to_vec()),
            Self::Gzip { .. } => {
                let mut output = Vec::new();
                GzDecoder::new(data)
                    .read_to_end(&mut output)
                    .map_err(|e| {
                        B0xError::Decompression(format!("Gzip decompression failed: {}", e))
                    })?;
                Ok(output)
            }
            Self::Zstd { .. } => zstd::decode_all(data).map_err(|e| {
                B0xError::Decompression(format!("Zstd decompression failed: {}", e))
            }),
            Self::Lz4 => lz4_flex::decompress_size_prepended(data).map_err(|e| {
                B0xError::Decompression(format!("LZ4 decompression failed: {}", e))
            }),
        }
    }

    /// Compress with gzip
    fn compress_gzip(data: &[u8], level: u32) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(
            Vec::with_capacity(data.len() / 2),
            flate2::Compression::new(level),
        );
        encoder
            .write_all(data)
            .map_err(|e| B0xError::Compression(format!("Gzip compression failed: {}", e)))?;
        encoder
            .finish()
            .map_err(|e| B0xError::Compression(format!("Gzip compression failed: {}", e)))
    }

    /// Compress with zstd
    fn compress_zstd(data: &[u8], level: i32) -> Result<Vec<u8>> {
        zstd::encode_all(data, level)
            .map_err(|e| B0xError::Compression(format!("Zstd compression failed: {}", e)))
    }
}

impl Compressor for Compression {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.validate()
            .map_err(|e| B0xError::Compression(e.to_string()))?;

        match *self {
            Self::None => Ok(data.to_vec()),
            Self::Gzip { level } => Self::compress_gzip(data, level),
            Self::Zstd { level } => Self::compress_zstd(data, level),
            Self::Lz4 => Ok(lz4_flex::compress_prepend_size(data)),
        }
    }

    fn enabled(&self) -> bool {
        *self != Self::None
    }
}
