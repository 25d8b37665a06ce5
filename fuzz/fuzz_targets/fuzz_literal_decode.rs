#![no_main]

use b0x::literal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes always survive an encode/decode cycle
    let encoded = literal::encode(data);
    match literal::decode(&encoded) {
        Ok(decoded) => assert_eq!(decoded, data),
        Err(e) => panic!("encoded literal failed to decode: {}", e),
    }

    // Arbitrary text must never panic the decoder
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(bytes) = literal::decode(text) {
            // Anything accepted re-encodes to the same literal, modulo hex case
            assert_eq!(literal::encode(&bytes), text.to_ascii_lowercase());
        }
    }
});
