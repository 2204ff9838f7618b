use einzahlung::*;
use rust_decimal_macros::dec;

// --- Checksum ---

#[test]
fn checksum_known_value() {
    assert_eq!(checksum("12345").unwrap(), "123457");
}

#[test]
fn checksum_rejects_non_digits() {
    let err = checksum("INV/2021").unwrap_err();
    assert!(matches!(err, IsrError::InvalidInput(_)));
    assert!(err.to_string().starts_with("invalid input"));
}

// --- ISR (PostFinance) ---

#[test]
fn isr_reference_from_invoice_sequence() {
    let reference = compute_reference_number(Some("INV/2021/0001"), None, false, true).unwrap();
    assert_eq!(reference.body(), "00000000000000000020210001");
    assert_eq!(reference.as_str(), "000000000000000000202100018");
    assert_eq!(reference.as_str().len(), REFERENCE_LEN);
}

#[test]
fn isr_optical_line_documented_example() {
    let subscription = compute_subscription(Some("010001628"), "CHF").unwrap();
    assert_eq!(subscription.display, "01-162-8");
    assert_eq!(subscription.scanline, "010001628");

    let reference: ReferenceNumber = "120000000000234478943216899".parse().unwrap();
    let line = compute_optical_line(dec!(3949.75), "CHF", Some(&reference), Some(&subscription));
    assert_eq!(line, "0100003949753>120000000000234478943216899+ 010001628>");
}

// --- ISR-B (through a bank) ---

#[test]
fn isrb_optical_line() {
    let subscription = compute_subscription(Some("01-23456-1"), "CHF").unwrap();
    assert_eq!(subscription.scanline, "010234561");

    let reference =
        compute_reference_number(Some("12345678901234567890"), Some("150001"), false, true)
            .unwrap();
    assert_eq!(reference.as_str(), "150001123456789012345678905");

    let line = compute_optical_line(dec!(494.00), "CHF", Some(&reference), Some(&subscription));
    assert_eq!(line, "0100000494004>150001123456789012345678905+ 010234561>");
}

#[test]
fn optical_line_snapshot() {
    let subscription = compute_subscription(Some("03-162-5"), "EUR").unwrap();
    let reference = compute_reference_number(Some("INV/2024/00042"), Some("1234"), false, true)
        .unwrap();
    let line = compute_optical_line(dec!(1250.5), "EUR", Some(&reference), Some(&subscription));
    insta::assert_snapshot!(line, @"0300001250506>001234000000000002024000426+ 030001625>");
}

// --- QRR ---

#[test]
fn qr_iban_reference_without_subscription() {
    let reference = compute_reference_number(Some("INV/2021/0001"), None, true, false).unwrap();
    assert_eq!(space_qrr_reference(reference.as_str()), reference.spaced());
    assert!(is_reference_valid(&reference.spaced()));
    assert_eq!(compute_optical_line(dec!(10), "CHF", Some(&reference), None), "");
}

// --- Display ---

#[test]
fn grouping_in_blocks_of_five() {
    assert_eq!(group_in_blocks_of_5("123456789"), "1234 56789");
    assert_eq!(
        group_in_blocks_of_5("123456789012345678901234567"),
        "12 34567 89012 34567 89012 34567"
    );
}

#[test]
fn assemble_with_empty_reference() {
    assert_eq!(assemble_optical_line("0100003949753", "", "010001628"), "");
}

// --- Validator ---

#[test]
fn externally_supplied_references() {
    assert!(is_reference_valid("12371"));
    assert!(is_reference_valid("000000000000000000000012371"));
    assert!(is_reference_valid("210000000003139471430009017"));
    assert!(is_reference_valid("21 00000 00003 13947 14300 09017"));

    assert!(!is_reference_valid("12372"));
    assert!(!is_reference_valid("RF18 5390 0754 7034"));
    assert!(!is_reference_valid("1"));
    assert!(!is_reference_valid(""));
    assert!(!is_reference_valid("   "));
}

// --- Serde ---

#[test]
fn reference_serializes_as_string() {
    let reference = build_reference("INV/2021/0001", None).unwrap();
    let json = serde_json::to_string(&reference).unwrap();
    assert_eq!(json, "\"000000000000000000202100018\"");

    let back: ReferenceNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(back, reference);
}

#[test]
fn tampered_reference_fails_to_deserialize() {
    let result: Result<ReferenceNumber, _> =
        serde_json::from_str("\"000000000000000000202100019\"");
    assert!(result.is_err());
}

#[test]
fn subscription_serializes_both_forms() {
    let subscription = format_subscription("01-162-8").unwrap();
    let json = serde_json::to_value(&subscription).unwrap();
    assert_eq!(json["display"], "01-162-8");
    assert_eq!(json["scanline"], "010001628");
}
