//! Order data: line items, billing address, and order assembly.
//!
//! An [`Order`] groups everything a charge or authorize call needs beyond the
//! card itself: the line items, supplementary amounts (tax, shipping,
//! discount), and order metadata. The builder performs no validation of its
//! own; order-level rules (item count, non-positive totals) are enforced once,
//! in the client pipeline, so nothing malformed is ever submitted.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{GatewayError, Result};

mod address;
mod line_item;

pub use address::BillingAddress;
pub use line_item::LineItem;

/// Maximum number of line items the gateway accepts on one transaction.
pub const MAX_LINE_ITEMS: usize = 30;

/// Rounds a monetary amount to cents, midpoint away from zero.
pub(crate) fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Order contents and metadata for a charge or authorize-only call.
///
/// Amounts default to zero and metadata to empty; empty metadata fields are
/// omitted from the built request. The line-item sequence is preserved in
/// the order given (it may matter for display, never for totals).
///
/// # Examples
///
/// ```
/// use authnet::{Decimal, LineItem, Order};
///
/// let items = vec![LineItem::new("SKU-1", "Golf tees", Decimal::new(499, 2), 2)?];
/// let order = Order::new(items)
///     .with_tax(Decimal::new(45, 2))
///     .with_invoice_number("INV-1001");
/// assert_eq!(order.subtotal(), Decimal::new(998, 2));
/// # Ok::<(), authnet::GatewayError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    line_items: Vec<LineItem>,
    tax: Decimal,
    shipping: Decimal,
    discount: Decimal,
    invoice_number: String,
    description: String,
    customer_id: String,
    customer_ip: String,
}

impl Order {
    /// Creates an order from its line items.
    #[must_use]
    pub fn new(line_items: Vec<LineItem>) -> Self {
        Self {
            line_items,
            tax: Decimal::ZERO,
            shipping: Decimal::ZERO,
            discount: Decimal::ZERO,
            invoice_number: String::new(),
            description: String::new(),
            customer_id: String::new(),
            customer_ip: String::new(),
        }
    }

    /// Sets the tax amount. Sent as a named extended amount only when
    /// greater than zero.
    #[must_use]
    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self
    }

    /// Sets the shipping amount. Sent as a named extended amount only when
    /// greater than zero.
    #[must_use]
    pub fn with_shipping(mut self, shipping: Decimal) -> Self {
        self.shipping = shipping;
        self
    }

    /// Sets a discount. Discounts reduce the submitted grand total but are
    /// never sent as a field of their own.
    #[must_use]
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the merchant invoice number; truncated to 20 characters when the
    /// request is built.
    #[must_use]
    pub fn with_invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = invoice_number.into();
        self
    }

    /// Sets the free-text order description; truncated to 255 characters
    /// when the request is built.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the merchant-internal customer identifier; truncated to 20
    /// characters when the request is built.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    /// Sets the customer's IP address. Its presence in the request is what
    /// activates fraud screening on the gateway side.
    #[must_use]
    pub fn with_customer_ip(mut self, customer_ip: impl Into<String>) -> Self {
        self.customer_ip = customer_ip.into();
        self
    }

    /// The line items, in the order given.
    #[must_use]
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// The tax amount.
    #[must_use]
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// The shipping amount.
    #[must_use]
    pub fn shipping(&self) -> Decimal {
        self.shipping
    }

    /// The discount amount.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// The invoice number; empty when none was supplied.
    #[must_use]
    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    /// The order description; empty when none was supplied.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The internal customer identifier; empty when none was supplied.
    #[must_use]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// The customer IP address; empty when none was supplied.
    #[must_use]
    pub fn customer_ip(&self) -> &str {
        &self.customer_ip
    }

    /// Sum of every line item's total.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.line_items.iter().map(LineItem::total).sum()
    }

    /// Validates the order and computes the grand total to charge.
    ///
    /// Rejects an empty or oversized line-item list, negative supplementary
    /// amounts, and a non-positive grand total. This runs before any request
    /// is built, so a rejected order never reaches the network.
    pub(crate) fn validated_total(&self) -> Result<Decimal> {
        if self.line_items.is_empty() {
            return Err(GatewayError::InvalidOrder(
                "an order requires at least one line item".to_owned(),
            ));
        }

        if self.line_items.len() > MAX_LINE_ITEMS {
            return Err(GatewayError::InvalidOrder(format!(
                "an order cannot contain more than {MAX_LINE_ITEMS} line items"
            )));
        }

        for (field, amount) in [("tax", self.tax), ("shipping", self.shipping), ("discount", self.discount)] {
            if amount < Decimal::ZERO {
                return Err(GatewayError::InvalidOrder(format!("{field} cannot be negative")));
            }
        }

        let total = round_to_cents(self.subtotal() + self.tax + self.shipping - self.discount);
        if total <= Decimal::ZERO {
            return Err(GatewayError::InvalidOrder(
                "order total must be greater than zero".to_owned(),
            ));
        }

        Ok(total)
    }
}
