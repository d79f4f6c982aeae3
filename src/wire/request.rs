//! Request-side wire model and request assembly.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::card::PaymentInstrument;
use crate::order::{BillingAddress, LineItem, Order};

const MAX_INVOICE_CHARS: usize = 20;
const MAX_CUSTOMER_ID_CHARS: usize = 20;
const MAX_DESCRIPTION_CHARS: usize = 255;

/// Merchant credentials, sent on every request.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAuthentication {
    /// API login identifier.
    pub name: String,
    /// Transaction key.
    pub transaction_key: String,
}

impl MerchantAuthentication {
    /// Creates merchant credentials. The strings are opaque to the client;
    /// the gateway rejects bad credentials with a request-level error.
    pub(crate) fn new(name: impl Into<String>, transaction_key: impl Into<String>) -> Self {
        Self { name: name.into(), transaction_key: transaction_key.into() }
    }
}

impl fmt::Debug for MerchantAuthentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantAuthentication")
            .field("name", &self.name)
            .field("transaction_key", &"***")
            .finish()
    }
}

/// Gateway transaction type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionType {
    /// Authorize and capture in one step.
    #[serde(rename = "authCaptureTransaction")]
    AuthCapture,
    /// Reserve funds without capturing.
    #[serde(rename = "authOnlyTransaction")]
    AuthOnly,
    /// Capture a previously authorized hold.
    #[serde(rename = "priorAuthCaptureTransaction")]
    PriorAuthCapture,
    /// Cancel an unsettled transaction.
    #[serde(rename = "voidTransaction")]
    Void,
    /// Return funds for a settled transaction.
    #[serde(rename = "refundTransaction")]
    Refund,
}

/// Card fields as the gateway expects them.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    /// Digits-only card number, or the last four for refund references.
    pub card_number: String,
    /// Expiration date, `YYYY-MM`.
    pub expiration_date: String,
    /// Verification code; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_code: Option<String>,
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("card_number", &mask_pan(&self.card_number))
            .field("expiration_date", &self.expiration_date)
            .field("card_code", &self.card_code.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Payment method wrapper.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// The card being charged or referenced.
    pub credit_card: CreditCard,
}

impl Payment {
    fn from_card(card: &PaymentInstrument) -> Self {
        Self {
            credit_card: CreditCard {
                card_number: card.card_number().to_owned(),
                expiration_date: card.expiration_date().to_owned(),
                card_code: non_empty(card.verification_code()),
            },
        }
    }
}

/// Order metadata block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    /// Invoice number, truncated to 20 characters; omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Free-text description, truncated to 255 characters; omitted when
    /// empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OrderFields {
    fn from_order(order: &Order) -> Option<Self> {
        let invoice_number = non_empty(&truncate_chars(order.invoice_number(), MAX_INVOICE_CHARS));
        let description = non_empty(&truncate_chars(order.description(), MAX_DESCRIPTION_CHARS));
        if invoice_number.is_none() && description.is_none() {
            return None;
        }
        Some(Self { invoice_number, description })
    }
}

/// One line item as the gateway expects it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLineItem {
    /// Caller-assigned SKU.
    pub item_id: String,
    /// Item name.
    pub name: String,
    /// Description; omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Quantity ordered.
    pub quantity: u32,
    /// Per-unit price.
    pub unit_price: Decimal,
    /// Whether the item is subject to tax.
    pub taxable: bool,
}

impl From<&LineItem> for WireLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            item_id: item.item_id().to_owned(),
            name: item.name().to_owned(),
            description: non_empty(item.description()),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            taxable: item.is_taxable(),
        }
    }
}

/// Line-item list wrapper.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemList {
    /// The mapped items, in order.
    pub line_item: Vec<WireLineItem>,
}

/// A named supplementary charge (tax, shipping) attached to a transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedAmount {
    /// The amount.
    pub amount: Decimal,
    /// The charge name, e.g. `Tax` or `Shipping`.
    pub name: String,
}

/// Customer identification block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    /// Customer type tag.
    #[serde(rename = "type")]
    pub customer_type: &'static str,
    /// Merchant-internal customer identifier, truncated to 20 characters;
    /// omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Customer email; omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CustomerData {
    fn from_order(order: &Order, bill_to: &BillingAddress) -> Option<Self> {
        if order.customer_id().is_empty() && bill_to.email().is_empty() {
            return None;
        }
        Some(Self {
            customer_type: "individual",
            id: non_empty(&truncate_chars(order.customer_id(), MAX_CUSTOMER_ID_CHARS)),
            email: non_empty(bill_to.email()),
        })
    }
}

/// Billing address fields as the gateway expects them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Company; omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Country code.
    pub country: String,
    /// Phone number; omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Email; omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&BillingAddress> for AddressFields {
    fn from(address: &BillingAddress) -> Self {
        Self {
            first_name: address.first_name().to_owned(),
            last_name: address.last_name().to_owned(),
            company: non_empty(address.company()),
            address: address.address().to_owned(),
            city: address.city().to_owned(),
            state: address.state().to_owned(),
            zip: address.zip().to_owned(),
            country: address.country().to_owned(),
            phone_number: non_empty(address.phone()),
            email: non_empty(address.email()),
        }
    }
}

/// One gateway transaction request.
///
/// Every block except the type tag is optional; each operation assembles
/// only the blocks its transaction type needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Transaction type tag.
    pub transaction_type: TransactionType,
    /// Amount to charge, capture, or refund; absent for voids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Card data; absent for captures and voids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    /// Prior transaction reference for captures, voids, and refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_trans_id: Option<String>,
    /// Order metadata; absent when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderFields>,
    /// Line items; absent for captures, voids, and refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<LineItemList>,
    /// Tax extended amount; absent unless greater than zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<ExtendedAmount>,
    /// Shipping extended amount; absent unless greater than zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ExtendedAmount>,
    /// Customer block; present only when a customer id or email exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerData>,
    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<AddressFields>,
    /// Customer IP; its presence activates gateway-side fraud screening.
    #[serde(rename = "customerIP", skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
}

impl TransactionRequest {
    /// Builds the full request shape shared by charge and authorize-only.
    pub(crate) fn for_order(
        transaction_type: TransactionType,
        amount: Decimal,
        card: &PaymentInstrument,
        bill_to: &BillingAddress,
        order: &Order,
    ) -> Self {
        Self {
            transaction_type,
            amount: Some(amount),
            payment: Some(Payment::from_card(card)),
            ref_trans_id: None,
            order: OrderFields::from_order(order),
            line_items: Some(LineItemList {
                line_item: order.line_items().iter().map(WireLineItem::from).collect(),
            }),
            tax: extended_amount("Tax", order.tax()),
            shipping: extended_amount("Shipping", order.shipping()),
            customer: CustomerData::from_order(order, bill_to),
            bill_to: Some(AddressFields::from(bill_to)),
            customer_ip: non_empty(order.customer_ip()),
        }
    }

    /// Builds a capture request for a previously authorized transaction.
    pub(crate) fn prior_auth_capture(transaction_id: &str, amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            ..Self::reference_only(TransactionType::PriorAuthCapture, transaction_id)
        }
    }

    /// Builds a void request for an unsettled transaction.
    pub(crate) fn void(transaction_id: &str) -> Self {
        Self::reference_only(TransactionType::Void, transaction_id)
    }

    /// Builds a refund request carrying a minimal card reference.
    pub(crate) fn refund(
        transaction_id: &str,
        card_last_four: &str,
        expiration_date: &str,
        amount: Decimal,
    ) -> Self {
        Self {
            amount: Some(amount),
            payment: Some(Payment {
                credit_card: CreditCard {
                    card_number: last_four_digits(card_last_four),
                    expiration_date: expiration_date.to_owned(),
                    card_code: None,
                },
            }),
            ..Self::reference_only(TransactionType::Refund, transaction_id)
        }
    }

    fn reference_only(transaction_type: TransactionType, transaction_id: &str) -> Self {
        Self {
            transaction_type,
            amount: None,
            payment: None,
            ref_trans_id: Some(transaction_id.to_owned()),
            order: None,
            line_items: None,
            tax: None,
            shipping: None,
            customer: None,
            bill_to: None,
            customer_ip: None,
        }
    }
}

/// The complete request body: credentials plus one transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Merchant credentials.
    pub merchant_authentication: MerchantAuthentication,
    /// The transaction being submitted.
    pub transaction_request: TransactionRequest,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn extended_amount(name: &str, amount: Decimal) -> Option<ExtendedAmount> {
    (amount > Decimal::ZERO).then(|| ExtendedAmount { amount, name: name.to_owned() })
}

fn last_four_digits(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
}

fn mask_pan(pan: &str) -> String {
    let count = pan.chars().count();
    if count <= 4 {
        return pan.to_owned();
    }
    let tail: String = pan.chars().skip(count - 4).collect();
    format!("XXXX{tail}")
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn sample_card() -> PaymentInstrument {
        PaymentInstrument::new("4111111111111111", "2027-11").unwrap()
    }

    fn sample_address() -> BillingAddress {
        BillingAddress::new("Ellen", "Johnson", "14 Main St", "Pecan Springs", "TX", "44628")
    }

    fn sample_order() -> Order {
        Order::new(vec![LineItem::new("SKU-1", "Golf tees", dec!(4.99), 2).unwrap()])
    }

    #[test]
    fn test_transaction_type_tags() {
        assert_eq!(serde_json::to_value(TransactionType::AuthCapture).unwrap(), json!("authCaptureTransaction"));
        assert_eq!(serde_json::to_value(TransactionType::AuthOnly).unwrap(), json!("authOnlyTransaction"));
        assert_eq!(
            serde_json::to_value(TransactionType::PriorAuthCapture).unwrap(),
            json!("priorAuthCaptureTransaction")
        );
        assert_eq!(serde_json::to_value(TransactionType::Void).unwrap(), json!("voidTransaction"));
        assert_eq!(serde_json::to_value(TransactionType::Refund).unwrap(), json!("refundTransaction"));
    }

    #[test]
    fn test_for_order_maps_line_items_one_to_one() {
        let order = Order::new(vec![
            LineItem::new("SKU-1", "Golf tees", dec!(45.00), 2).unwrap().taxable(true),
            LineItem::new("SKU-2", "Golf balls", dec!(55.00), 1).unwrap().taxable(true),
        ]);
        let request =
            TransactionRequest::for_order(TransactionType::AuthCapture, dec!(145.00), &sample_card(), &sample_address(), &order);

        let items = request.line_items.unwrap().line_item;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_id, "SKU-1");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_price, dec!(45.00));
        assert!(items[0].taxable);
        assert!(items[0].description.is_none());
    }

    #[test]
    fn test_empty_verification_code_omitted() {
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &sample_order(),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["payment"]["creditCard"].get("cardCode").is_none());
    }

    #[test]
    fn test_verification_code_included_when_present() {
        let card = sample_card().with_verification_code("123");
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &card,
            &sample_address(),
            &sample_order(),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["payment"]["creditCard"]["cardCode"], json!("123"));
    }

    #[test]
    fn test_zero_extended_amounts_omitted() {
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &sample_order(),
        );
        assert!(request.tax.is_none());
        assert!(request.shipping.is_none());
    }

    #[test]
    fn test_positive_extended_amounts_named() {
        let order = sample_order().with_tax(dec!(9.45)).with_shipping(dec!(5.00));
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(24.43),
            &sample_card(),
            &sample_address(),
            &order,
        );
        assert_eq!(request.tax.as_ref().unwrap().name, "Tax");
        assert_eq!(request.tax.unwrap().amount, dec!(9.45));
        assert_eq!(request.shipping.as_ref().unwrap().name, "Shipping");
        assert_eq!(request.shipping.unwrap().amount, dec!(5.00));
    }

    #[test]
    fn test_order_block_omitted_when_empty() {
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &sample_order(),
        );
        assert!(request.order.is_none());
    }

    #[test]
    fn test_invoice_and_description_truncated() {
        let order = sample_order()
            .with_invoice_number("INV-123456789012345678901234")
            .with_description("D".repeat(300));
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &order,
        );
        let fields = request.order.unwrap();
        assert_eq!(fields.invoice_number.unwrap(), "INV-1234567890123456");
        assert_eq!(fields.description.unwrap().chars().count(), 255);
    }

    #[test]
    fn test_customer_block_requires_id_or_email() {
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &sample_order(),
        );
        assert!(request.customer.is_none());

        let order = sample_order().with_customer_id("CUST-7");
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &order,
        );
        let customer = request.customer.unwrap();
        assert_eq!(customer.customer_type, "individual");
        assert_eq!(customer.id.unwrap(), "CUST-7");
        assert!(customer.email.is_none());

        let address = sample_address().with_email("ellen@example.com");
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &address,
            &sample_order(),
        );
        assert_eq!(request.customer.unwrap().email.unwrap(), "ellen@example.com");
    }

    #[test]
    fn test_customer_ip_omitted_when_empty() {
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &sample_order(),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("customerIP").is_none());

        let order = sample_order().with_customer_ip("198.51.100.7");
        let request = TransactionRequest::for_order(
            TransactionType::AuthCapture,
            dec!(9.98),
            &sample_card(),
            &sample_address(),
            &order,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["customerIP"], json!("198.51.100.7"));
    }

    #[test]
    fn test_address_optional_fields_omitted() {
        let value = serde_json::to_value(AddressFields::from(&sample_address())).unwrap();
        assert_eq!(value["firstName"], json!("Ellen"));
        assert_eq!(value["country"], json!("US"));
        assert!(value.get("company").is_none());
        assert!(value.get("phoneNumber").is_none());
        assert!(value.get("email").is_none());
    }

    #[test]
    fn test_prior_auth_capture_is_minimal() {
        let request = TransactionRequest::prior_auth_capture("60123456789", dec!(42.50));
        assert_eq!(request.transaction_type, TransactionType::PriorAuthCapture);
        assert_eq!(request.amount.unwrap(), dec!(42.50));
        assert_eq!(request.ref_trans_id.as_deref(), Some("60123456789"));
        assert!(request.payment.is_none());
        assert!(request.line_items.is_none());
        assert!(request.bill_to.is_none());
    }

    #[test]
    fn test_void_carries_no_amount() {
        let request = TransactionRequest::void("60123456789");
        assert_eq!(request.transaction_type, TransactionType::Void);
        assert!(request.amount.is_none());
        assert_eq!(request.ref_trans_id.as_deref(), Some("60123456789"));
    }

    #[test]
    fn test_refund_builds_card_reference() {
        let request = TransactionRequest::refund("60123456789", "XXXX1111", "2027-11", dec!(10.00));
        let card = request.payment.unwrap().credit_card;
        assert_eq!(card.card_number, "1111");
        assert_eq!(card.expiration_date, "2027-11");
        assert!(card.card_code.is_none());
        assert_eq!(request.amount.unwrap(), dec!(10.00));
        assert_eq!(request.ref_trans_id.as_deref(), Some("60123456789"));
    }

    #[test]
    fn test_debug_masks_secrets() {
        let auth = MerchantAuthentication::new("login", "super-secret-key");
        let debug = format!("{auth:?}");
        assert!(!debug.contains("super-secret-key"));

        let card = CreditCard {
            card_number: "4111111111111111".to_owned(),
            expiration_date: "2027-11".to_owned(),
            card_code: Some("123".to_owned()),
        };
        let debug = format!("{card:?}");
        assert!(debug.contains("XXXX1111"));
        assert!(!debug.contains("4111111111111111"));
    }

    #[test]
    fn test_last_four_digits() {
        assert_eq!(last_four_digits("XXXX1111"), "1111");
        assert_eq!(last_four_digits("4111111111111111"), "1111");
        assert_eq!(last_four_digits("42"), "42");
    }
}
