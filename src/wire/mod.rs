//! Provider wire format.
//!
//! Serde models for the gateway's JSON transaction API, split by direction:
//! [`request`] holds everything the client sends, [`response`] holds what the
//! gateway returns plus the normalization into
//! [`TransactionResult`](crate::TransactionResult).
//!
//! Optional request fields use `skip_serializing_if`: on this wire, omission
//! is the "absent" signal. An empty verification code, a zero tax amount, or
//! a blank customer IP are never sent as empty or zero values.

pub mod request;
pub mod response;

pub use request::{CreateTransactionRequest, MerchantAuthentication, TransactionRequest, TransactionType};
pub use response::{
    GatewayResponse, Message, MessageSet, ResultCode, TransactionError, TransactionMessage,
    TransactionResponse,
};
