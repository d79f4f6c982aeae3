//! Typed client for the Authorize.Net transaction API.
//!
//! This crate assembles well-formed card transactions from order data,
//! submits them through a pluggable transport, and flattens the gateway's
//! heterogeneous response shapes into one uniform result type. It owns the
//! request-building and response-normalization logic; everything network-
//! shaped lives behind the [`Transport`] trait.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  Caller              │  builds LineItem / BillingAddress /
//! │                      │  PaymentInstrument / Order
//! └─────────┬────────────┘
//!           │
//! ┌─────────▼────────────┐
//! │  GatewayClient       │  validates, computes totals, builds the
//! │  (this crate)        │  provider-shaped request, normalizes the
//! └─────────┬────────────┘  response into TransactionResult
//!           │ Transport trait
//! ┌─────────▼────────────┐
//! │  HttpTransport       │  POSTs JSON to the sandbox or production
//! │  (reqwest)           │  endpoint; any failure becomes "no response"
//! └──────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use authnet::{
//!     BillingAddress, Decimal, Environment, GatewayClient, LineItem, Order, PaymentInstrument,
//! };
//!
//! # async fn example() -> authnet::Result<()> {
//! let client = GatewayClient::new("api-login-id", "transaction-key", Environment::Sandbox)?;
//!
//! let card = PaymentInstrument::new("4111-1111-1111-1111", "2027-11")?
//!     .with_verification_code("123");
//! let bill_to = BillingAddress::new("Ellen", "Johnson", "14 Main Street", "Pecan Springs", "TX", "44628")
//!     .with_email("ellen@example.com");
//! let order = Order::new(vec![
//!     LineItem::new("SKU-1", "Golf tees", Decimal::new(499, 2), 2)?,
//! ])
//! .with_tax(Decimal::new(82, 2))
//! .with_invoice_number("INV-1001");
//!
//! let result = client.charge(&card, &bill_to, &order).await?;
//! if result.success {
//!     println!("approved: {} ({})", result.transaction_id, result.auth_code);
//! } else {
//!     println!("failed: {:?} {:?}", result.error_code, result.error_text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Outcomes, not exceptions
//!
//! Only local input validation returns `Err` (see [`GatewayError`]). Every
//! gateway outcome - approval, hold for review, decline, transaction error,
//! request-level rejection, even total transport failure - arrives as an
//! `Ok(TransactionResult)` with `success`, `response_code`, and the error
//! fields populated consistently, so callers branch on one flat value.
//!
//! # Module Organization
//!
//! - [`client`]: [`GatewayClient`] operations and the [`Environment`] selector
//! - [`order`]: [`LineItem`], [`BillingAddress`], [`Order`]
//! - [`card`]: [`PaymentInstrument`]
//! - [`result`]: [`TransactionResult`] and [`ResponseCode`]
//! - [`wire`]: provider wire format and response normalization
//! - [`transport`]: the [`Transport`] trait and bundled [`HttpTransport`]
//! - [`error`]: [`GatewayError`] and the crate [`Result`] alias
//!
//! # Concurrency
//!
//! A [`GatewayClient`] holds no per-call mutable state; share one instance
//! across tasks freely. Each operation performs exactly one submit-and-wait
//! round trip. The core has no retry, backoff, or timeout logic of its own -
//! that is transport policy.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod card;
pub mod client;
pub mod error;
pub mod order;
pub mod result;
pub mod transport;
pub mod wire;

pub use card::PaymentInstrument;
pub use client::{Environment, GatewayClient};
pub use error::{GatewayError, Result};
pub use order::{BillingAddress, LineItem, MAX_LINE_ITEMS, Order};
pub use result::{ResponseCode, TransactionResult};
pub use rust_decimal::Decimal;
pub use transport::{HttpTransport, Transport};
