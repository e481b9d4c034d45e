//! Customer records.
//!
//! Three immutable shapes share the base visit fields. [`Record`] is the
//! closed union a broker routes; handlers tell the shapes apart with an
//! exhaustive `match` on it.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Errors raised while building a record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// A required field was never set on the builder.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ConstructionError> {
    value.ok_or(ConstructionError::MissingField(field))
}

// ============================================================================
// Base record
// ============================================================================

/// Fields every customer record carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    last_visit: DateTime<Utc>,
    order_id: u64,
}

impl CustomerRecord {
    /// Creates a base record.
    pub fn new(last_visit: DateTime<Utc>, order_id: u64) -> Self {
        Self {
            last_visit,
            order_id,
        }
    }

    /// Starts a builder with no fields set.
    pub fn builder() -> CustomerRecordBuilder {
        CustomerRecordBuilder::default()
    }

    /// When the customer last visited.
    pub fn last_visit(&self) -> DateTime<Utc> {
        self.last_visit
    }

    /// The order this visit belongs to.
    pub fn order_id(&self) -> u64 {
        self.order_id
    }
}

/// Builder for [`CustomerRecord`].
#[derive(Debug, Clone, Default)]
pub struct CustomerRecordBuilder {
    last_visit: Option<DateTime<Utc>>,
    order_id: Option<u64>,
}

impl CustomerRecordBuilder {
    /// Set the last visit timestamp.
    pub fn last_visit(mut self, last_visit: DateTime<Utc>) -> Self {
        self.last_visit = Some(last_visit);
        self
    }

    /// Set the order id.
    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Build the record, failing on the first missing field.
    pub fn build(self) -> Result<CustomerRecord, ConstructionError> {
        Ok(CustomerRecord {
            last_visit: require(self.last_visit, "last_visit")?,
            order_id: require(self.order_id, "order_id")?,
        })
    }
}

// ============================================================================
// Unregistered customer
// ============================================================================

/// A visit by a customer without an account, identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisteredCustomerRecord {
    base: CustomerRecord,
    name: String,
    surname: String,
}

impl UnregisteredCustomerRecord {
    /// Creates an unregistered customer record.
    pub fn new(
        last_visit: DateTime<Utc>,
        order_id: u64,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            base: CustomerRecord::new(last_visit, order_id),
            name: name.into(),
            surname: surname.into(),
        }
    }

    /// Starts a builder with no fields set.
    pub fn builder() -> UnregisteredCustomerRecordBuilder {
        UnregisteredCustomerRecordBuilder::default()
    }

    /// The shared visit fields.
    pub fn base(&self) -> &CustomerRecord {
        &self.base
    }

    /// When the customer last visited.
    pub fn last_visit(&self) -> DateTime<Utc> {
        self.base.last_visit
    }

    /// The order this visit belongs to.
    pub fn order_id(&self) -> u64 {
        self.base.order_id
    }

    /// Given name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Family name.
    pub fn surname(&self) -> &str {
        &self.surname
    }
}

/// Builder for [`UnregisteredCustomerRecord`].
#[derive(Debug, Clone, Default)]
pub struct UnregisteredCustomerRecordBuilder {
    base: CustomerRecordBuilder,
    name: Option<String>,
    surname: Option<String>,
}

impl UnregisteredCustomerRecordBuilder {
    /// Set the last visit timestamp.
    pub fn last_visit(mut self, last_visit: DateTime<Utc>) -> Self {
        self.base = self.base.last_visit(last_visit);
        self
    }

    /// Set the order id.
    pub fn order_id(mut self, order_id: u64) -> Self {
        self.base = self.base.order_id(order_id);
        self
    }

    /// Set the given name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the family name.
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Build the record, failing on the first missing field.
    pub fn build(self) -> Result<UnregisteredCustomerRecord, ConstructionError> {
        Ok(UnregisteredCustomerRecord {
            base: self.base.build()?,
            name: require(self.name, "name")?,
            surname: require(self.surname, "surname")?,
        })
    }
}

// ============================================================================
// Registered customer
// ============================================================================

/// A visit by a customer with an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCustomerRecord {
    base: CustomerRecord,
    customer_id: u64,
}

impl RegisteredCustomerRecord {
    /// Creates a registered customer record.
    pub fn new(last_visit: DateTime<Utc>, order_id: u64, customer_id: u64) -> Self {
        Self {
            base: CustomerRecord::new(last_visit, order_id),
            customer_id,
        }
    }

    /// Starts a builder with no fields set.
    pub fn builder() -> RegisteredCustomerRecordBuilder {
        RegisteredCustomerRecordBuilder::default()
    }

    /// The shared visit fields.
    pub fn base(&self) -> &CustomerRecord {
        &self.base
    }

    /// When the customer last visited.
    pub fn last_visit(&self) -> DateTime<Utc> {
        self.base.last_visit
    }

    /// The order this visit belongs to.
    pub fn order_id(&self) -> u64 {
        self.base.order_id
    }

    /// Account id.
    pub fn customer_id(&self) -> u64 {
        self.customer_id
    }
}

/// Builder for [`RegisteredCustomerRecord`].
#[derive(Debug, Clone, Default)]
pub struct RegisteredCustomerRecordBuilder {
    base: CustomerRecordBuilder,
    customer_id: Option<u64>,
}

impl RegisteredCustomerRecordBuilder {
    /// Set the last visit timestamp.
    pub fn last_visit(mut self, last_visit: DateTime<Utc>) -> Self {
        self.base = self.base.last_visit(last_visit);
        self
    }

    /// Set the order id.
    pub fn order_id(mut self, order_id: u64) -> Self {
        self.base = self.base.order_id(order_id);
        self
    }

    /// Set the account id.
    pub fn customer_id(mut self, customer_id: u64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Build the record, failing on the first missing field.
    pub fn build(self) -> Result<RegisteredCustomerRecord, ConstructionError> {
        Ok(RegisteredCustomerRecord {
            base: self.base.build()?,
            customer_id: require(self.customer_id, "customer_id")?,
        })
    }
}

// ============================================================================
// Tagged union
// ============================================================================

/// Which shape a [`Record`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Only the shared visit fields.
    Base,
    /// A [`UnregisteredCustomerRecord`].
    Unregistered,
    /// A [`RegisteredCustomerRecord`].
    Registered,
}

impl Variant {
    /// Lowercase name, as used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Unregistered => "unregistered",
            Variant::Registered => "registered",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer record of any shape; the value a broker routes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "macros", derive(courier_macros::Message))]
pub enum Record {
    /// Only the shared visit fields.
    Base(CustomerRecord),
    /// A customer without an account.
    Unregistered(UnregisteredCustomerRecord),
    /// A customer with an account.
    Registered(RegisteredCustomerRecord),
}

#[cfg(not(feature = "macros"))]
impl courier_core::Message for Record {}

impl Record {
    /// The variant tag.
    pub fn variant(&self) -> Variant {
        match self {
            Record::Base(_) => Variant::Base,
            Record::Unregistered(_) => Variant::Unregistered,
            Record::Registered(_) => Variant::Registered,
        }
    }

    /// The shared visit fields, whatever the shape.
    pub fn base(&self) -> &CustomerRecord {
        match self {
            Record::Base(base) => base,
            Record::Unregistered(customer) => customer.base(),
            Record::Registered(customer) => customer.base(),
        }
    }

    /// When the customer last visited.
    pub fn last_visit(&self) -> DateTime<Utc> {
        self.base().last_visit()
    }

    /// The order this visit belongs to.
    pub fn order_id(&self) -> u64 {
        self.base().order_id()
    }
}

impl From<CustomerRecord> for Record {
    fn from(record: CustomerRecord) -> Self {
        Record::Base(record)
    }
}

impl From<UnregisteredCustomerRecord> for Record {
    fn from(record: UnregisteredCustomerRecord) -> Self {
        Record::Unregistered(record)
    }
}

impl From<RegisteredCustomerRecord> for Record {
    fn from(record: RegisteredCustomerRecord) -> Self {
        Record::Registered(record)
    }
}
