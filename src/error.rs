//! Error types for gateway client operations.
//!
//! All errors here are *local*: they are raised before a request is built or
//! while constructing the bundled HTTP transport, and never reach the
//! network. Gateway-side outcomes (declines, holds, request rejections,
//! connectivity failures) are not errors in this sense - they are reported
//! uniformly through [`TransactionResult`](crate::TransactionResult).
//!
//! # Examples
//!
//! ```
//! use authnet::{Decimal, GatewayError, LineItem};
//!
//! let item = LineItem::new("", "Golf tees", Decimal::new(499, 2), 1);
//! assert!(matches!(item, Err(GatewayError::InvalidLineItem(_))));
//! ```

use thiserror::Error;

/// Result type alias for gateway client operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur before a transaction request reaches the gateway.
///
/// Every validation variant carries a message naming the offending field and
/// the rule it violated, so callers can surface it directly.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A line item field violated a length or sign constraint.
    ///
    /// Raised at [`LineItem`](crate::LineItem) construction, before any
    /// request is assembled.
    #[error("invalid line item: {0}")]
    InvalidLineItem(String),

    /// A card number or expiration date failed validation.
    ///
    /// Raised at [`PaymentInstrument`](crate::PaymentInstrument)
    /// construction. Card numbers must normalize to 13-19 digits;
    /// expiration dates must use the `YYYY-MM` format.
    #[error("invalid card: {0}")]
    InvalidCard(String),

    /// The order as a whole cannot be submitted.
    ///
    /// Raised by the charge/authorize pipeline when the line-item count is
    /// outside 1-30, an amount is negative, or the computed grand total is
    /// not positive. A non-positive charge is never sent to the gateway.
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// The bundled HTTP transport could not be constructed.
    ///
    /// Only [`GatewayClient::new`](crate::GatewayClient::new) and
    /// [`HttpTransport::new`](crate::HttpTransport::new) produce this;
    /// failures while *submitting* a request surface as a `NO_RESPONSE`
    /// transaction result instead.
    #[error("HTTP client construction failed: {0}")]
    Http(#[from] reqwest::Error),
}
