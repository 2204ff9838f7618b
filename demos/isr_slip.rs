use einzahlung::invoice::*;
use einzahlung::{group_in_blocks_of_5, is_reference_valid};
use rust_decimal_macros::dec;

fn main() {
    // Customer invoice paid to a PostFinance ISR account
    let mut invoice = IsrInvoiceBuilder::new("CHF")
        .name("INV/2024/00042")
        .amount_residual(dec!(3949.75))
        .partner_bank(
            BankAccountBuilder::new()
                .isr_subscription_chf("01-162-8")
                .isr_subscription_eur("03-162-5")
                .build(),
        )
        .build()
        .expect("invoice snapshot");

    let slip = invoice.isr_print().expect("ISR ready");

    println!("Subscription: {}", slip.subscription.display);
    println!("Amount:       {} {}.{}", slip.currency, slip.amount_units, slip.amount_cents);
    println!("Reference:    {}", slip.reference_spaced);
    println!("Optical line: {}", slip.optical_line);
    println!("Sent:         {}", invoice.isr_sent);

    // ISR-B: same invoice through a bank with a customer ID
    let isrb = IsrInvoiceBuilder::new("CHF")
        .name("INV/2024/00042")
        .amount_residual(dec!(494))
        .partner_bank(
            BankAccountBuilder::new()
                .isr_subscription_chf("01-23456-1")
                .isr_customer_id("150001")
                .build(),
        )
        .build()
        .expect("invoice snapshot");

    println!("\nISR-B reference:    {}", isrb.isr_number_spaced().unwrap_or_default());
    println!("ISR-B optical line: {}", isrb.isr_optical_line());

    // Checking a reference received on a vendor bill
    let received = "210000000003139471430009017";
    println!(
        "\n{} is {}",
        group_in_blocks_of_5(received),
        if is_reference_valid(received) { "valid" } else { "invalid" }
    );
}
