//! HTTP transport implementation using reqwest.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::warn;

use crate::client::Environment;
use crate::error::Result;
use crate::transport::Transport;
use crate::wire::{CreateTransactionRequest, GatewayResponse};

/// Request envelope: the gateway wraps every transaction body in a single
/// top-level key.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    #[serde(rename = "createTransactionRequest")]
    create_transaction_request: &'a CreateTransactionRequest,
}

/// HTTP transport with connection pooling.
///
/// Configuration follows the bundled defaults: 10 idle connections per host,
/// 30 second total timeout, 10 second connect timeout. The client is reused
/// across calls, so one transport (or one [`GatewayClient`]) per process is
/// enough.
///
/// [`GatewayClient`]: crate::GatewayClient
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates an HTTP transport with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`](crate::GatewayError::Http) if the
    /// underlying client cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn submit<'a>(
        &'a self,
        environment: Environment,
        request: &'a CreateTransactionRequest,
    ) -> Option<GatewayResponse> {
        let envelope = Envelope { create_transaction_request: request };

        let response = match self
            .client
            .post(environment.endpoint_url())
            .json(&envelope)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "gateway request failed to send");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "gateway returned a non-success status");
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "failed to read gateway response body");
                return None;
            }
        };

        decode_body(&body)
    }
}

/// Decodes a gateway response body.
///
/// The gateway prefixes JSON bodies with a UTF-8 BOM, which serde_json
/// rejects; strip it before decoding.
fn decode_body(body: &str) -> Option<GatewayResponse> {
    match serde_json::from_str(body.trim_start_matches('\u{feff}')) {
        Ok(response) => Some(response),
        Err(error) => {
            warn!(%error, "failed to decode gateway response body");
            None
        }
    }
}
