use crate::compression::Compressor;
use crate::custom::filter::ReplaceRule;
use crate::error::Result;
use memchr::memmem;
use tracing::trace;

/// Produce the final bytes of a file: apply every matching replacement rule,
/// then compress.
///
/// Rules apply in declaration order and every matching rule applies, so a
/// later rule sees the output of an earlier one.
pub fn transform<C: Compressor + ?Sized>(
    mut content: Vec<u8>,
    path: &str,
    rules: &[ReplaceRule<'_>],
    compressor: &C,
) -> Result<Vec<u8>> {
    for rule in rules {
        if !rule.glob.matches(path) {
            continue;
        }

        trace!(path, rule = rule.glob.as_str(), "applying replacements");
        for (from, to) in rule.pairs {
            content = replace_all(content, from.as_bytes(), to.as_bytes());
        }
    }

    if compressor.enabled() {
        content = compressor.compress(&content)?;
    }

    Ok(content)
}

/// Replace every non-overlapping occurrence of `needle`, left to right.
///
/// An empty needle matches before every character and once at the end, so
/// `replacement` is interleaved with the content.
pub fn replace_all(content: Vec<u8>, needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() {
        return interleave(&content, replacement);
    }

    let finder = memmem::Finder::new(needle);
    if finder.find(&content).is_none() {
        return content;
    }

    let mut output = Vec::with_capacity(content.len());
    let mut last = 0;
    for start in finder.find_iter(&content) {
        output.extend_from_slice(&content[last..start]);
        output.extend_from_slice(replacement);
        last = start + needle.len();
    }
    output.extend_from_slice(&content[last..]);

    output
}

/// Insert `replacement` before each UTF-8 character and after the last one.
///
/// Bytes that do not start a valid sequence count as one character each.
fn interleave(content: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(content.len() + (content.len() + 1) * replacement.len());
    let mut pos = 0;
    while pos < content.len() {
        let width = char_width(&content[pos..]);
        output.extend_from_slice(replacement);
        output.extend_from_slice(&content[pos..pos + width]);
        pos += width;
    }
    output.extend_from_slice(replacement);
    output
}

/// Length of the UTF-8 character at the start of `bytes`, or 1 if invalid
fn char_width(bytes: &[u8]) -> usize {
    let expected = match bytes[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return 1,
    };
    match bytes.get(..expected).map(std::str::from_utf8) {
        Some(Ok(_)) => expected,
        _ => 1,
    }
}
