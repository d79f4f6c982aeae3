//! Response-side wire model and normalization.
//!
//! The gateway conflates three distinct failure categories into different
//! nesting shapes: transport absence arrives as no response at all, declines
//! and transaction errors arrive inside a transaction sub-response, and
//! request-level rejections (bad credentials, malformed fields) arrive as
//! top-level messages with no usable sub-response. [`normalize`] classifies
//! a raw response into exactly one of four outcomes and flattens it into an
//! always-populated [`TransactionResult`].

use serde::Deserialize;

use crate::result::{ResponseCode, TransactionResult};

/// Error code reported when the transport returned no response at all.
pub const NO_RESPONSE_CODE: &str = "NO_RESPONSE";

/// Overall result status of a gateway response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ResultCode {
    /// The request was processed; the transaction sub-response carries the
    /// outcome (which may still be a decline or hold).
    Ok,
    /// The request itself was rejected or the transaction failed.
    Error,
}

/// One top-level gateway message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Gateway message code, e.g. `I00001` or `E00007`.
    #[serde(default)]
    pub code: String,
    /// Human-readable message text.
    #[serde(default)]
    pub text: String,
}

/// The top-level message block present on every response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSet {
    /// Overall result status.
    pub result_code: ResultCode,
    /// Top-level messages; the first one describes request-level rejections.
    #[serde(default)]
    pub message: Vec<Message>,
}

/// One message inside the transaction sub-response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionMessage {
    /// Message code.
    #[serde(default)]
    pub code: String,
    /// Message description, used as the normalized response text.
    #[serde(default)]
    pub description: String,
}

/// One error inside the transaction sub-response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionError {
    /// Gateway error code.
    #[serde(default)]
    pub error_code: String,
    /// Gateway error text.
    #[serde(default)]
    pub error_text: String,
}

/// The transaction-level sub-response.
///
/// Every field defaults so partial gateway responses still deserialize; a
/// declined transaction may carry a transaction id and AVS/CVV outcomes
/// alongside its errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction response code as a wire string (`"1"`..`"4"`).
    #[serde(default)]
    pub response_code: String,
    /// Issuer authorization code.
    #[serde(default)]
    pub auth_code: String,
    /// Address verification result code.
    #[serde(default)]
    pub avs_result_code: String,
    /// Card verification result code.
    #[serde(default)]
    pub cvv_result_code: String,
    /// Gateway-assigned transaction identifier.
    #[serde(default)]
    pub trans_id: String,
    /// Masked account number, e.g. `XXXX1111`.
    #[serde(default)]
    pub account_number: String,
    /// Account type, e.g. `Visa`.
    #[serde(default)]
    pub account_type: String,
    /// Transaction-level messages; present on accepted transactions.
    #[serde(default)]
    pub messages: Vec<TransactionMessage>,
    /// Transaction-level errors; present on declines and failures.
    #[serde(default)]
    pub errors: Vec<TransactionError>,
}

/// A raw gateway response as returned by the transport collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// Top-level message block.
    pub messages: MessageSet,
    /// Transaction sub-response; absent on request-level rejections.
    #[serde(default)]
    pub transaction_response: Option<TransactionResponse>,
}

/// The four shapes a raw response can take.
enum Outcome<'a> {
    /// The transport returned nothing at all.
    NoResponse,
    /// Overall Ok with a populated transaction sub-response; approved or
    /// held for review.
    Completed(&'a TransactionResponse),
    /// A transaction sub-response carrying errors; declined or failed.
    Failed(&'a TransactionResponse),
    /// No usable transaction sub-response; request-level rejection.
    Rejected(Option<&'a Message>),
}

fn classify(raw: Option<&GatewayResponse>) -> Outcome<'_> {
    let Some(response) = raw else {
        return Outcome::NoResponse;
    };
    match response.transaction_response.as_ref() {
        Some(txn) if response.messages.result_code == ResultCode::Ok && !txn.messages.is_empty() => {
            Outcome::Completed(txn)
        }
        Some(txn) if !txn.errors.is_empty() => Outcome::Failed(txn),
        _ => Outcome::Rejected(response.messages.message.first()),
    }
}

/// Flattens a raw response (or its absence) into a [`TransactionResult`].
///
/// Every branch produces a fully populated result; gateway outcomes never
/// surface as errors.
pub(crate) fn normalize(raw: Option<GatewayResponse>) -> TransactionResult {
    match classify(raw.as_ref()) {
        Outcome::NoResponse => TransactionResult {
            success: false,
            transaction_id: String::new(),
            auth_code: String::new(),
            response_code: ResponseCode::Error,
            response_text: String::new(),
            avs_result_code: String::new(),
            cvv_result_code: String::new(),
            account_number: String::new(),
            account_type: String::new(),
            error_code: Some(NO_RESPONSE_CODE.to_owned()),
            error_text: Some("no response received from the payment gateway".to_owned()),
        },
        Outcome::Completed(txn) => TransactionResult {
            success: true,
            transaction_id: txn.trans_id.clone(),
            auth_code: txn.auth_code.clone(),
            response_code: ResponseCode::from_wire(&txn.response_code),
            response_text: txn.messages.first().map(|m| m.description.clone()).unwrap_or_default(),
            avs_result_code: txn.avs_result_code.clone(),
            cvv_result_code: txn.cvv_result_code.clone(),
            account_number: txn.account_number.clone(),
            account_type: txn.account_type.clone(),
            error_code: None,
            error_text: None,
        },
        Outcome::Failed(txn) => {
            let (code, text) = txn
                .errors
                .first()
                .map(|e| (e.error_code.clone(), e.error_text.clone()))
                .unwrap_or_default();
            TransactionResult {
                success: false,
                transaction_id: txn.trans_id.clone(),
                auth_code: txn.auth_code.clone(),
                response_code: ResponseCode::from_wire(&txn.response_code),
                response_text: text.clone(),
                avs_result_code: txn.avs_result_code.clone(),
                cvv_result_code: txn.cvv_result_code.clone(),
                account_number: txn.account_number.clone(),
                account_type: txn.account_type.clone(),
                error_code: Some(code),
                error_text: Some(text),
            }
        }
        Outcome::Rejected(message) => {
            let (code, text) = message
                .map(|m| (m.code.clone(), m.text.clone()))
                .unwrap_or_else(|| ("UNKNOWN".to_owned(), "unknown gateway error".to_owned()));
            TransactionResult {
                success: false,
                transaction_id: String::new(),
                auth_code: String::new(),
                response_code: ResponseCode::Error,
                response_text: text.clone(),
                avs_result_code: String::new(),
                cvv_result_code: String::new(),
                account_number: String::new(),
                account_type: String::new(),
                error_code: Some(code),
                error_text: Some(text),
            }
        }
    }
}
