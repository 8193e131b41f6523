//! Fuzz target for point sequence parsing.
//!
//! Lenient and strict parsing must agree whenever strict parsing succeeds,
//! and the re-encoded sequence must parse back to the same length.

#![no_main]

use graphattr::codec::{points_from_string, points_from_string_strict, points_to_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let lenient = points_from_string(text);
    if let Ok(strict) = points_from_string_strict(text) {
        assert_eq!(strict.len(), lenient.len());
    }

    let reparsed = points_from_string(&points_to_string(&lenient));
    assert_eq!(reparsed.len(), lenient.len());
});
