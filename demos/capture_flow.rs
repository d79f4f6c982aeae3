//! Two-step flow: authorize only, capture later, void on failure.
//!
//! Reads sandbox credentials from `AUTHNET_LOGIN_ID` and
//! `AUTHNET_TRANSACTION_KEY`, like the `charge` example.

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
    let client = GatewayClient::new(login_id, transaction_key, Environment::Sandbox)?;

    let card = PaymentInstrument::new("4111111111111111", "2027-11")?;
    let bill_to = BillingAddress::new("Ellen", "Johnson", "14 Main Street", "Pecan Springs", "TX", "44628");
    let order = Order::new(vec![LineItem::new("SKU-9", "Club rental", dec!(80.00), 1)?])
        .with_description("One-day club rental deposit");

    println!("1. Reserving funds (authorize only)...");
    let auth = client.authorize_only(&card, &bill_to, &order).await?;
    if !auth.success {
        println!("   ✗ Authorization failed: {}", auth.response_text);
        return Ok(());
    }
    println!("   ✓ Authorized, transaction ID {}", auth.transaction_id);

    println!("2. Capturing the hold...");
    let capture = client.capture_authorized(&auth.transaction_id, dec!(80.00)).await?;
    if capture.success {
        println!("   ✓ Captured");
        return Ok(());
    }

    println!("   ✗ Capture failed ({}), voiding the hold...", capture.response_text);
    let void = client.void(&auth.transaction_id).await?;
    println!("   Void {}", if void.success { "succeeded" } else { "failed" });

    Ok(())
}
