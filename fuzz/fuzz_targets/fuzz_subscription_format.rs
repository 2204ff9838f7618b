#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(formatted) = einzahlung::format_subscription(s) {
            assert_eq!(formatted.scanline.len(), 9);
        }
        let _ = einzahlung::is_isr_issuer(s);
    }
});
