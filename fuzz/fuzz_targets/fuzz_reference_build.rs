#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, Option<String>)| {
    let (name, customer_id) = input;
    if let Ok(reference) = einzahlung::build_reference(&name, customer_id.as_deref()) {
        assert_eq!(reference.as_str().len(), einzahlung::REFERENCE_LEN);
        assert!(einzahlung::is_valid_reference(reference.as_str()));
    }
});
