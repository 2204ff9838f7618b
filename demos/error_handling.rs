use einzahlung::invoice::*;
use einzahlung::*;
use rust_decimal_macros::dec;

fn main() {
    // ── 1. Print blocked: every blocker is reported at once ───────────
    println!("=== Print Blocked ===");
    let mut draft = IsrInvoiceBuilder::new("USD")
        .move_type(MoveType::OutRefund)
        .build()
        .expect("invoice snapshot");

    match draft.isr_print() {
        Ok(slip) => println!("  Printed {}", slip.reference),
        Err(e) => println!("{e}"),
    }

    // ── 2. Blockers as structured data ────────────────────────────────
    println!("\n=== validate_isr() ===");
    for e in validate_isr(&draft) {
        println!("  - {e}");
    }

    // ── 3. Not ready is not an error ──────────────────────────────────
    println!("\n=== Not Ready ===");
    let reference = compute_reference_number(None, None, false, true);
    println!("  Reference without invoice name: {reference:?}");
    let line = compute_optical_line(dec!(10), "CHF", reference.as_ref(), None);
    println!("  Optical line: {line:?}");

    // ── 4. Contract violations fail loudly ────────────────────────────
    println!("\n=== Invalid Input ===");
    match checksum("INV/2024") {
        Ok(c) => println!("  Checksum: {c}"),
        Err(e) => println!("  {e}"),
    }
    match format_subscription("01-1234567-8") {
        Ok(s) => println!("  Subscription: {}", s.display),
        Err(e) => println!("  {e}"),
    }
    match format_amount(dec!(123456789.10), SwissCurrency::Chf) {
        Ok(a) => println!("  Amount: {a}"),
        Err(e) => println!("  {e}"),
    }

    // ── 5. Builder errors ─────────────────────────────────────────────
    println!("\n=== Builder Error ===");
    match IsrInvoiceBuilder::new("chf").build() {
        Ok(_) => println!("  Built (unexpected)"),
        Err(e) => println!("  {e}"),
    }
}
