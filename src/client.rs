//! The gateway client: request assembly, submission, and normalization.

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::card::PaymentInstrument;
use crate::error::Result;
use crate::order::{BillingAddress, Order, round_to_cents};
use crate::result::TransactionResult;
use crate::transport::{HttpTransport, Transport};
use crate::wire::response;
use crate::wire::{CreateTransactionRequest, MerchantAuthentication, TransactionRequest, TransactionType};

/// Gateway environment selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The gateway's sandbox, for test credentials and test cards.
    Sandbox,
    /// The live gateway.
    Production,
}

impl Environment {
    /// The transaction API endpoint for this environment.
    #[must_use]
    pub const fn endpoint_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://apitest.authorize.net/xml/v1/request.api",
            Self::Production => "https://api.authorize.net/xml/v1/request.api",
        }
    }
}

/// A typed client for the gateway's transaction API.
///
/// The client holds two credentials and an environment selector, set once at
/// construction and never mutated. It keeps no per-call state, so a single
/// instance can serve concurrent calls from independent tasks.
///
/// Each operation follows the same pipeline: validate inputs locally, build
/// a provider-shaped request, submit it through the transport, and normalize
/// whatever comes back into a [`TransactionResult`]. Validation failures are
/// the only `Err` outcomes; declines, holds, request rejections, and
/// transport absence all arrive as `Ok` results with the appropriate
/// response and error codes.
#[derive(Debug)]
pub struct GatewayClient<T = HttpTransport> {
    auth: MerchantAuthentication,
    environment: Environment,
    transport: T,
}

impl GatewayClient<HttpTransport> {
    /// Creates a client using the bundled HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`](crate::GatewayError::Http) if the
    /// transport cannot be constructed.
    pub fn new(
        login_id: impl Into<String>,
        transaction_key: impl Into<String>,
        environment: Environment,
    ) -> Result<Self> {
        Ok(Self::with_transport(login_id, transaction_key, environment, HttpTransport::new()?))
    }
}

impl<T: Transport> GatewayClient<T> {
    /// Creates a client with a caller-provided transport.
    #[must_use]
    pub fn with_transport(
        login_id: impl Into<String>,
        transaction_key: impl Into<String>,
        environment: Environment,
        transport: T,
    ) -> Self {
        Self {
            auth: MerchantAuthentication::new(login_id, transaction_key),
            environment,
            transport,
        }
    }

    /// The environment this client submits to.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Authorizes and captures a charge in one step.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidOrder`](crate::GatewayError::InvalidOrder)
    /// when the line-item count is outside 1-30, an amount is negative, or
    /// the grand total (subtotal + tax + shipping - discount) is not
    /// positive. Rejected orders never reach the network.
    #[instrument(skip_all)]
    pub async fn charge(
        &self,
        card: &PaymentInstrument,
        bill_to: &BillingAddress,
        order: &Order,
    ) -> Result<TransactionResult> {
        self.submit_order(TransactionType::AuthCapture, card, bill_to, order).await
    }

    /// Reserves funds without capturing them.
    ///
    /// The returned result's transaction id is what a later
    /// [`capture_authorized`](Self::capture_authorized) call references.
    ///
    /// # Errors
    ///
    /// Same order validation as [`charge`](Self::charge).
    #[instrument(skip_all)]
    pub async fn authorize_only(
        &self,
        card: &PaymentInstrument,
        bill_to: &BillingAddress,
        order: &Order,
    ) -> Result<TransactionResult> {
        self.submit_order(TransactionType::AuthOnly, card, bill_to, order).await
    }

    /// Captures a previously authorized transaction.
    ///
    /// The amount is rounded to cents. No line items or billing data are
    /// resent.
    ///
    /// # Errors
    ///
    /// Does not fail locally; gateway outcomes arrive in the result.
    #[instrument(skip_all, fields(transaction_id))]
    pub async fn capture_authorized(
        &self,
        transaction_id: &str,
        amount: Decimal,
    ) -> Result<TransactionResult> {
        self.submit(TransactionRequest::prior_auth_capture(transaction_id, round_to_cents(amount)))
            .await
    }

    /// Cancels an unsettled transaction.
    ///
    /// # Errors
    ///
    /// Does not fail locally; gateway outcomes arrive in the result.
    #[instrument(skip_all, fields(transaction_id))]
    pub async fn void(&self, transaction_id: &str) -> Result<TransactionResult> {
        self.submit(TransactionRequest::void(transaction_id)).await
    }

    /// Refunds a settled transaction, fully or partially.
    ///
    /// The gateway matches the original instrument by the last four card
    /// digits and the original expiration date; `card_last_four` accepts a
    /// masked form such as `XXXX1111`.
    ///
    /// # Errors
    ///
    /// Does not fail locally; gateway outcomes arrive in the result.
    #[instrument(skip_all, fields(transaction_id))]
    pub async fn refund(
        &self,
        transaction_id: &str,
        card_last_four: &str,
        expiration_date: &str,
        amount: Decimal,
    ) -> Result<TransactionResult> {
        self.submit(TransactionRequest::refund(
            transaction_id,
            card_last_four,
            expiration_date,
            round_to_cents(amount),
        ))
        .await
    }

    /// Shared pipeline for the order-carrying operations.
    async fn submit_order(
        &self,
        transaction_type: TransactionType,
        card: &PaymentInstrument,
        bill_to: &BillingAddress,
        order: &Order,
    ) -> Result<TransactionResult> {
        let amount = order.validated_total()?;
        self.submit(TransactionRequest::for_order(transaction_type, amount, card, bill_to, order))
            .await
    }

    /// Submits one built request and normalizes the outcome.
    async fn submit(&self, transaction_request: TransactionRequest) -> Result<TransactionResult> {
        let request = CreateTransactionRequest {
            merchant_authentication: self.auth.clone(),
            transaction_request,
        };
        debug!(
            transaction_type = ?request.transaction_request.transaction_type,
            environment = ?self.environment,
            "submitting gateway request"
        );

        let raw = self.transport.submit(self.environment, &request).await;
        let result = response::normalize(raw);

        info!(
            success = result.success,
            response_code = result.response_code.as_u8(),
            transaction_id = %result.transaction_id,
            "gateway response normalized"
        );
        Ok(result)
    }
}
