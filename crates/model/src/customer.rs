use serde::{Deserialize, Serialize};

use customer_core::{AuditFields, Audited, ValueObject};

/// Contact and address attributes of a customer.
///
/// Every attribute is optional and unvalidated at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl ValueObject for CustomerDetails {}

/// Customer record: audit columns plus contact/address attributes.
///
/// A plain, independently owned value. It holds no references to other
/// records; persistence (id assignment, audit stamping) happens elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    audit: AuditFields,
    #[serde(flatten)]
    details: CustomerDetails,
}

impl Customer {
    /// Empty, unpersisted customer (all fields unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Customer with every attribute given up front, audit fields unset.
    pub fn from_details(details: CustomerDetails) -> Self {
        Self {
            audit: AuditFields::new(),
            details,
        }
    }

    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut CustomerDetails {
        &mut self.details
    }

    pub fn into_details(self) -> CustomerDetails {
        self.details
    }
}

impl Audited for Customer {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

macro_rules! detail_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        impl Customer {
            $(
                pub fn $field(&self) -> Option<&str> {
                    self.details.$field.as_deref()
                }

                pub fn $setter(&mut self, value: Option<String>) {
                    self.details.$field = value;
                }
            )*
        }
    };
}

detail_accessors! {
    first_name => set_first_name,
    last_name => set_last_name,
    email => set_email,
    phone_number => set_phone_number,
    address => set_address,
    city => set_city,
    country => set_country,
    postal_code => set_postal_code,
}
