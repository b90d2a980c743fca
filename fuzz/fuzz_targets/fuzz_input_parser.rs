//! Fuzz target for `key=value` input parsing.
//!
//! Goal: The parser should **never panic** on any input, and any entry it accepts must
//! have exactly one `=`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_input_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let entries: Vec<&str> = text.split('\n').collect();
        if let Ok(map) = opc_settings::parse_inputs(&entries) {
            assert!(entries.iter().all(|e| e.matches('=').count() == 1));
            assert!(map.len() <= entries.len());
        }
    }
});
