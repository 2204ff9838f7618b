#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Predicates must not panic, errors are fine.
        let _ = einzahlung::is_valid_reference(s);
        let _ = s.parse::<einzahlung::ReferenceNumber>();
    }
});
