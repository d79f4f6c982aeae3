//! Normalized transaction outcomes.
//!
//! The gateway reports outcomes through several differently-nested response
//! shapes. Response normalization (in [`crate::wire`]) flattens all of them
//! into one [`TransactionResult`], so callers branch on a single always-
//! populated value instead of probing nested optionals.

/// Gateway transaction response code.
///
/// `Approved` and `HeldForReview` both arrive on an overall-Ok response; a
/// hold means the gateway accepted the transaction but parked it for manual
/// review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ResponseCode {
    /// The transaction was approved.
    Approved = 1,
    /// The transaction was declined.
    Declined = 2,
    /// An error occurred: transaction-level, request-level, or transport
    /// absence.
    Error = 3,
    /// The transaction was accepted but held for manual review.
    HeldForReview = 4,
}

impl ResponseCode {
    /// Maps the wire's string code to a response code.
    ///
    /// Anything outside `"1"`..`"4"` maps to [`ResponseCode::Error`].
    pub(crate) fn from_wire(code: &str) -> Self {
        match code.trim() {
            "1" => Self::Approved,
            "2" => Self::Declined,
            "4" => Self::HeldForReview,
            _ => Self::Error,
        }
    }

    /// The numeric code as reported by the gateway.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// The normalized outcome of a gateway call.
///
/// Produced once by response normalization and never mutated. Every field is
/// populated on every path: absent wire data becomes an empty string, and
/// the error fields are `Some` exactly when the call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    /// Whether the gateway accepted the transaction (approved or held).
    pub success: bool,
    /// The gateway-assigned transaction identifier; may be empty. Declined
    /// transactions can still carry one.
    pub transaction_id: String,
    /// The issuer authorization code; may be empty.
    pub auth_code: String,
    /// The transaction response code.
    pub response_code: ResponseCode,
    /// Human-readable outcome description.
    pub response_text: String,
    /// Address Verification System result (`Y`/`A`/`Z`/`N`/`U` or empty).
    pub avs_result_code: String,
    /// Card verification code result (`M`/`N`/`P`/`S`/`U` or empty).
    pub cvv_result_code: String,
    /// Masked account number, e.g. `XXXX1111`.
    pub account_number: String,
    /// Account type, e.g. `Visa`.
    pub account_type: String,
    /// Gateway or client error code; `None` on success.
    pub error_code: Option<String>,
    /// Gateway or client error text; `None` on success.
    pub error_text: Option<String>,
}

impl TransactionResult {
    /// True when the response code is [`ResponseCode::Approved`].
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.response_code, ResponseCode::Approved)
    }

    /// True when the response code is [`ResponseCode::Declined`].
    #[must_use]
    pub const fn is_declined(&self) -> bool {
        matches!(self.response_code, ResponseCode::Declined)
    }

    /// True when the response code is [`ResponseCode::HeldForReview`].
    #[must_use]
    pub const fn is_held_for_review(&self) -> bool {
        matches!(self.response_code, ResponseCode::HeldForReview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_known_codes() {
        assert_eq!(ResponseCode::from_wire("1"), ResponseCode::Approved);
        assert_eq!(ResponseCode::from_wire("2"), ResponseCode::Declined);
        assert_eq!(ResponseCode::from_wire("3"), ResponseCode::Error);
        assert_eq!(ResponseCode::from_wire("4"), ResponseCode::HeldForReview);
    }

    #[test]
    fn test_from_wire_unknown_codes_map_to_error() {
        for code in ["", "0", "5", "99", "approved"] {
            assert_eq!(ResponseCode::from_wire(code), ResponseCode::Error);
        }
    }

    #[test]
    fn test_from_wire_trims_whitespace() {
        assert_eq!(ResponseCode::from_wire(" 1 "), ResponseCode::Approved);
    }

    #[test]
    fn test_as_u8() {
        assert_eq!(ResponseCode::Approved.as_u8(), 1);
        assert_eq!(ResponseCode::Declined.as_u8(), 2);
        assert_eq!(ResponseCode::Error.as_u8(), 3);
        assert_eq!(ResponseCode::HeldForReview.as_u8(), 4);
    }

    #[test]
    fn test_predicates() {
        let result = TransactionResult {
            success: false,
            transaction_id: "60123".to_owned(),
            auth_code: String::new(),
            response_code: ResponseCode::Declined,
            response_text: "This transaction has been declined.".to_owned(),
            avs_result_code: "N".to_owned(),
            cvv_result_code: String::new(),
            account_number: "XXXX1111".to_owned(),
            account_type: "Visa".to_owned(),
            error_code: Some("2".to_owned()),
            error_text: Some("This transaction has been declined.".to_owned()),
        };
        assert!(result.is_declined());
        assert!(!result.is_approved());
        assert!(!result.is_held_for_review());
    }
}
