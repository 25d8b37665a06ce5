//! Byte-string literal encoding
//!
//! Content is embedded as a Rust byte-string literal in which every byte is
//! written as a `\xHH` escape, e.g. `b"\x68\x69"` for `hi`. The escape form
//! keeps zero and non-printable bytes intact and makes the encoding exactly
//! reversible with [`decode`].

use crate::error::{B0xError, Result};

/// Opening delimiter of an encoded literal
pub const LITERAL_OPEN: &str = "b\"";

/// Closing delimiter of an encoded literal
pub const LITERAL_CLOSE: &str = "\"";

/// Bytes of literal text produced per input byte (`\xHH`)
pub const ESCAPE_WIDTH: usize = 4;

/// Encode bytes as an escaped byte-string literal
pub fn encode(data: &[u8]) -> String {
    let digits = hex::encode(data);

    let mut literal = String::with_capacity(
        data.len() * ESCAPE_WIDTH + LITERAL_OPEN.len() + LITERAL_CLOSE.len(),
    );
    literal.push_str(LITERAL_OPEN);
    for pair in digits.as_bytes().chunks_exact(2) {
        literal.push_str("\\x");
        literal.push(pair[0] as char);
        literal.push(pair[1] as char);
    }
    literal.push_str(LITERAL_CLOSE);

    literal
}

/// Decode a literal produced by [`encode`] back into its bytes
pub fn decode(literal: &str) -> Result<Vec<u8>> {
    let body = literal
        .strip_prefix(LITERAL_OPEN)
        .and_then(|rest| rest.strip_suffix(LITERAL_CLOSE))
        .ok_or_else(|| {
            B0xError::InvalidLiteral(format!(
                "expected {}...{} delimiters",
                LITERAL_OPEN, LITERAL_CLOSE
            ))
        })?;

    let body = body.as_bytes();
    if body.len() % ESCAPE_WIDTH != 0 {
        return Err(B0xError::InvalidLiteral(format!(
            "body length {} is not a multiple of {}",
            body.len(),
            ESCAPE_WIDTH
        )));
    }

    let mut digits = Vec::with_capacity(body.len() / 2);
    for (idx, escape) in body.chunks_exact(ESCAPE_WIDTH).enumerate() {
        if &escape[..2] != b"\\x" {
            return Err(B0xError::InvalidLiteral(format!(
                "byte {} is not a \\x escape",
                idx
            )));
        }
        digits.extend_from_slice(&escape[2..]);
    }

    hex::decode(&digits).map_err(|e| B0xError::InvalidLiteral(e.to_string()))
}
