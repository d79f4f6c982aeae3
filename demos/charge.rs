//! Basic charge example: authorize and capture in one step.
//!
//! Reads sandbox credentials from the environment:
//!
//! ```bash
//! export AUTHNET_LOGIN_ID=your-login-id
//! export AUTHNET_TRANSACTION_KEY=your-transaction-key
//! cargo run --example charge
//! ```

#![allow(
    clippy::print_stdout,
    reason = "examples are allowed to print results"
)]

use authnet::{
    BillingAddress, Environment, GatewayClient, LineItem, Order, PaymentInstrument,
};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let login_id = std::env::var("AUTHNET_LOGIN_ID")?;
    let transaction_key = std::env::var("AUTHNET_TRANSACTION_KEY")?;

    println!("1. Creating sandbox client...");
    let client = GatewayClient::new(login_id, transaction_key, Environment::Sandbox)?;

    println!("2. Building order data...");
    // 4111... is the gateway's standard Visa test number.
    let card = PaymentInstrument::new("4111-1111-1111-1111", "2027-11")?
        .with_verification_code("123");
    let bill_to = BillingAddress::new("Ellen", "Johnson", "14 Main Street", "Pecan Springs", "TX", "44628")
        .with_email("ellen@example.com");
    let order = Order::new(vec![
        LineItem::new("SKU-1", "Golf tees", dec!(45.00), 2)?.taxable(true),
        LineItem::new("SKU-2", "Golf balls", dec!(55.00), 1)?.taxable(true),
        LineItem::new("SKU-3", "Towel", dec!(12.00), 1)?,
    ])
    .with_tax(dec!(9.45))
    .with_shipping(dec!(5.00))
    .with_invoice_number("INV-1001");
    println!("   Subtotal: {}", order.subtotal());

    println!("3. Submitting charge...");
    let result = client.charge(&card, &bill_to, &order).await?;

    if result.success {
        println!("   ✓ Charge accepted");
        println!("   Transaction ID: {}", result.transaction_id);
        println!("   Auth code:      {}", result.auth_code);
        println!("   Account:        {} {}", result.account_type, result.account_number);
        println!("   AVS / CVV:      {} / {}", result.avs_result_code, result.cvv_result_code);
    } else {
        println!("   ✗ Charge failed: {}", result.response_text);
        if let Some(code) = &result.error_code {
            println!("   Error code: {code}");
        }
    }

    Ok(())
}
