//! Fuzz target for attribute text decoding.
//!
//! Feeds arbitrary UTF-8 text to every lenient decoder and re-encodes the
//! result, checking for panics.

#![no_main]

use graphattr::codec::fuzz_decode_all;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        fuzz_decode_all(text);
    }
});
