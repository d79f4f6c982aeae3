//! Payment instrument: card number, expiration date, verification code.

use std::fmt;

use crate::error::{GatewayError, Result};

/// A validated payment card.
///
/// The card number is normalized to digits at construction: space and dash
/// separators are stripped, and the remaining digits must count 13 to 19.
/// The normalized form replaces the raw input everywhere downstream.
///
/// The verification code is stored verbatim and not validated locally; the
/// gateway validates it and reports the outcome in the CVV result code.
///
/// # Examples
///
/// ```
/// use authnet::PaymentInstrument;
///
/// let card = PaymentInstrument::new("4111-1111-1111-1111", "2027-11")?
///     .with_verification_code("123");
/// assert_eq!(card.card_number(), "4111111111111111");
/// assert_eq!(card.last_four(), "1111");
/// # Ok::<(), authnet::GatewayError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentInstrument {
    card_number: String,
    expiration_date: String,
    verification_code: String,
}

impl PaymentInstrument {
    /// Creates a payment instrument from a card number and expiration date.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidCard`] if the card number contains
    /// characters other than digits, spaces, and dashes, if it does not
    /// normalize to 13-19 digits, or if the expiration date does not match
    /// the `YYYY-MM` format.
    pub fn new(card_number: &str, expiration_date: &str) -> Result<Self> {
        let normalized: String = card_number.chars().filter(|c| !matches!(c, ' ' | '-')).collect();

        if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GatewayError::InvalidCard(
                "card number must contain only digits, spaces, and dashes".to_owned(),
            ));
        }

        if !(13..=19).contains(&normalized.len()) {
            return Err(GatewayError::InvalidCard(
                "card number must be 13 to 19 digits".to_owned(),
            ));
        }

        if !is_year_month(expiration_date) {
            return Err(GatewayError::InvalidCard(
                "expiration date must use the YYYY-MM format".to_owned(),
            ));
        }

        Ok(Self {
            card_number: normalized,
            expiration_date: expiration_date.to_owned(),
            verification_code: String::new(),
        })
    }

    /// Attaches a card verification code (CVV/CVC).
    ///
    /// The code is passed through to the gateway unmodified. An empty code
    /// is treated as absent and omitted from the built request.
    #[must_use]
    pub fn with_verification_code(mut self, code: impl Into<String>) -> Self {
        self.verification_code = code.into();
        self
    }

    /// The normalized, digits-only card number.
    #[must_use]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The expiration date in `YYYY-MM` format.
    #[must_use]
    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    /// The verification code; empty when none was supplied.
    #[must_use]
    pub fn verification_code(&self) -> &str {
        &self.verification_code
    }

    /// The last four digits of the card number, as used in masked displays
    /// and refund card references.
    #[must_use]
    pub fn last_four(&self) -> &str {
        // Normalized numbers are ASCII digits with length >= 13.
        &self.card_number[self.card_number.len() - 4..]
    }
}

impl fmt::Debug for PaymentInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentInstrument")
            .field("card_number", &format_args!("XXXX{}", self.last_four()))
            .field("expiration_date", &self.expiration_date)
            .field("verification_code", &"***")
            .finish()
    }
}

/// Returns true for strings of the form `YYYY-MM` with a month of 01-12.
fn is_year_month(value: &str) -> bool {
    let Some((year, month)) = value.split_once('-') else {
        return false;
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_plain_number_accepted() {
        let card = PaymentInstrument::new("4111111111111111", "2027-11").unwrap();
        assert_eq!(card.card_number(), "4111111111111111");
        assert_eq!(card.expiration_date(), "2027-11");
        assert_eq!(card.verification_code(), "");
    }

    #[test]
    fn test_separators_stripped() {
        let card = PaymentInstrument::new("4111-1111-1111-1111", "2027-11").unwrap();
        assert_eq!(card.card_number(), "4111111111111111");

        let card = PaymentInstrument::new("4111 1111 1111 1111", "2027-11").unwrap();
        assert_eq!(card.card_number(), "4111111111111111");
    }

    #[test]
    fn test_thirteen_and_nineteen_digit_numbers_accepted() {
        assert!(PaymentInstrument::new("4222222222222", "2027-01").is_ok());
        assert!(PaymentInstrument::new("4111111111111111111", "2027-01").is_ok());
    }

    #[test]
    fn test_too_short_number_rejected() {
        let result = PaymentInstrument::new("411111111111", "2027-11");
        assert!(matches!(result, Err(GatewayError::InvalidCard(_))));
    }

    #[test]
    fn test_too_long_number_rejected() {
        let result = PaymentInstrument::new("41111111111111111111", "2027-11");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_digit_characters_rejected() {
        let result = PaymentInstrument::new("4111abcd11111111", "2027-11");
        assert!(matches!(result, Err(GatewayError::InvalidCard(message)) if message.contains("digits")));
    }

    #[test]
    fn test_empty_number_rejected() {
        assert!(PaymentInstrument::new("", "2027-11").is_err());
        assert!(PaymentInstrument::new("- - -", "2027-11").is_err());
    }

    #[test]
    fn test_malformed_expiration_rejected() {
        for bad in ["27-11", "2027/11", "2027-1", "2027-13", "2027-00", "202711", "2027-11-01"] {
            let result = PaymentInstrument::new("4111111111111111", bad);
            assert!(result.is_err(), "expiration {bad:?} should be rejected");
        }
    }

    #[test]
    fn test_verification_code_stored_verbatim() {
        let card = PaymentInstrument::new("4111111111111111", "2027-11")
            .unwrap()
            .with_verification_code("0123");
        assert_eq!(card.verification_code(), "0123");
    }

    #[test]
    fn test_last_four() {
        let card = PaymentInstrument::new("370000000000002", "2027-11").unwrap();
        assert_eq!(card.last_four(), "0002");
    }

    #[test]
    fn test_debug_masks_card_data() {
        let card = PaymentInstrument::new("4111111111111111", "2027-11")
            .unwrap()
            .with_verification_code("123");
        let debug = format!("{card:?}");
        assert!(debug.contains("XXXX1111"));
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123"));
    }

    proptest! {
        #[test]
        fn separator_laced_numbers_normalize_to_digits(digits in "[0-9]{13,19}") {
            let mut laced = String::new();
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && i % 4 == 0 {
                    laced.push('-');
                }
                laced.push(c);
            }
            let card = PaymentInstrument::new(&laced, "2027-01").unwrap();
            prop_assert_eq!(card.card_number(), digits.as_str());
        }

        #[test]
        fn out_of_range_lengths_rejected(digits in "[0-9]{1,12}") {
            prop_assert!(PaymentInstrument::new(&digits, "2027-01").is_err());
        }
    }
}
