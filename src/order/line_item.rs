//! A single priced, quantified catalog entry on an order.

use rust_decimal::Decimal;

use crate::error::{GatewayError, Result};

const MAX_ID_CHARS: usize = 31;
const MAX_NAME_CHARS: usize = 31;
const MAX_DESCRIPTION_CHARS: usize = 255;

/// A validated order line item.
///
/// Length and sign constraints are enforced at construction; a constructed
/// item is immutable and always well-formed. The item total is derived, not
/// stored: `unit_price x quantity`, rounded to cents.
///
/// # Examples
///
/// ```
/// use authnet::{Decimal, LineItem};
///
/// let item = LineItem::new("SKU-1", "Golf tees", Decimal::new(499, 2), 3)?
///     .with_description("Bag of 50")?
///     .taxable(true);
/// assert_eq!(item.total(), Decimal::new(1497, 2));
/// # Ok::<(), authnet::GatewayError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    item_id: String,
    name: String,
    unit_price: Decimal,
    quantity: u32,
    description: String,
    taxable: bool,
}

impl LineItem {
    /// Creates a line item.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidLineItem`] naming the field and rule
    /// when `item_id` or `name` is empty or longer than 31 characters, when
    /// `unit_price` is negative, or when `quantity` is zero.
    pub fn new(
        item_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Result<Self> {
        let item_id = item_id.into();
        let name = name.into();

        if item_id.is_empty() {
            return Err(GatewayError::InvalidLineItem("item_id cannot be empty".to_owned()));
        }
        if item_id.chars().count() > MAX_ID_CHARS {
            return Err(GatewayError::InvalidLineItem(format!(
                "item_id must be {MAX_ID_CHARS} characters or less"
            )));
        }
        if name.is_empty() {
            return Err(GatewayError::InvalidLineItem("name cannot be empty".to_owned()));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(GatewayError::InvalidLineItem(format!(
                "name must be {MAX_NAME_CHARS} characters or less"
            )));
        }
        if unit_price < Decimal::ZERO {
            return Err(GatewayError::InvalidLineItem("unit_price cannot be negative".to_owned()));
        }
        if quantity < 1 {
            return Err(GatewayError::InvalidLineItem("quantity must be at least 1".to_owned()));
        }

        Ok(Self {
            item_id,
            name,
            unit_price,
            quantity,
            description: String::new(),
            taxable: false,
        })
    }

    /// Attaches a description.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidLineItem`] when the description is
    /// longer than 255 characters.
    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(GatewayError::InvalidLineItem(format!(
                "description must be {MAX_DESCRIPTION_CHARS} characters or less"
            )));
        }
        self.description = description;
        Ok(self)
    }

    /// Marks whether the item is subject to tax.
    #[must_use]
    pub fn taxable(mut self, taxable: bool) -> Self {
        self.taxable = taxable;
        self
    }

    /// The caller-assigned SKU.
    #[must_use]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// The item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The per-unit price.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// The quantity ordered.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The description; empty when none was supplied.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the item is subject to tax.
    #[must_use]
    pub fn is_taxable(&self) -> bool {
        self.taxable
    }

    /// The item total: `unit_price x quantity`, rounded to cents.
    #[must_use]
    pub fn total(&self) -> Decimal {
        super::round_to_cents(self.unit_price * Decimal::from(self.quantity))
    }
}
