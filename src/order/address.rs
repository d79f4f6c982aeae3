//! Customer billing address and contact data.

/// A billing address.
///
/// Plain immutable value object: the required fields are constructor
/// arguments, the optional ones default to empty and are omitted from built
/// requests when left that way. `country` defaults to `"US"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingAddress {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    country: String,
    company: String,
    phone: String,
    email: String,
}

impl BillingAddress {
    /// Creates a billing address from its required fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            country: "US".to_owned(),
            company: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    /// Overrides the default country of `"US"`.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the email address. A non-empty email also makes the built
    /// request carry a customer block.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// The customer's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The customer's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// The state or province.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The postal code.
    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// The country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The company name; empty when none was supplied.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// The phone number; empty when none was supplied.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The email address; empty when none was supplied.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
