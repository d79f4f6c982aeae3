//! Transport abstraction layer.
//!
//! The [`Transport`] trait is the crate's sole network boundary: the client
//! builds a provider-shaped request, hands it to the transport together with
//! the target environment, and gets back either a parsed response or nothing.
//! "Nothing" is deliberately the only failure signal - connectivity and TLS
//! failures, unexpected statuses, and undecodable bodies all collapse into
//! `None`, which normalization reports as a `NO_RESPONSE` result.
//!
//! The bundled [`HttpTransport`] covers the common case. The trait is open
//! so callers can substitute their own transport - tests use an in-memory
//! mock, and deployments with bespoke HTTP stacks can bring them.

use crate::client::Environment;
use crate::wire::{CreateTransactionRequest, GatewayResponse};

pub mod http;

pub use http::HttpTransport;

/// Submits provider-shaped requests to the gateway.
///
/// Implementations must not panic; any failure to produce a parsed response
/// is reported by returning `None`. Retry, backoff, and timeout policy live
/// here (or below), never in the client.
pub trait Transport: Send + Sync {
    /// Submits one transaction request to the given environment's endpoint.
    ///
    /// Returns the parsed gateway response, or `None` when no usable
    /// response was received.
    fn submit<'a>(
        &'a self,
        environment: Environment,
        request: &'a CreateTransactionRequest,
    ) -> impl Future<Output = Option<GatewayResponse>> + Send + 'a;
}
