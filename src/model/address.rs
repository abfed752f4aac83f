use std::fmt;

use crate::error::{PhonelistError, PhonelistResult};
use crate::validation;

/// Whether a contact channel is used for work or privately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sector {
    Work,
    #[default]
    Private,
}

impl Sector {
    pub fn label(self) -> &'static str {
        match self {
            Sector::Work => "arbetet",
            Sector::Private => "privat",
        }
    }
}

/// A single way of reaching a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    Postal {
        street: String,
        postal_code: String,
        city: String,
        sector: Sector,
    },
    Email {
        address: String,
        sector: Sector,
    },
    Phone {
        number: String,
        sector: Sector,
    },
}

impl Address {
    /// Builds a postal address from `"street, postal code, city"`.
    pub fn postal(raw: &str, sector: Sector) -> PhonelistResult<Self> {
        let [street, postal_code, city] =
            validation::split_exact::<3>(raw, ',').map_err(|found| PhonelistError::PostalArity {
                value: raw.trim().to_string(),
                found,
            })?;
        Ok(Address::Postal {
            street,
            postal_code,
            city,
            sector,
        })
    }

    pub fn email(address: impl Into<String>, sector: Sector) -> Self {
        Address::Email {
            address: address.into(),
            sector,
        }
    }

    pub fn phone(number: impl Into<String>, sector: Sector) -> Self {
        Address::Phone {
            number: number.into(),
            sector,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        match self {
            Address::Postal { .. } => "PostalAddress",
            Address::Email { .. } => "Email",
            Address::Phone { .. } => "Phone",
        }
    }

    pub fn sector(&self) -> Sector {
        match self {
            Address::Postal { sector, .. }
            | Address::Email { sector, .. }
            | Address::Phone { sector, .. } => *sector,
        }
    }

    /// One-line description as shown in a person's full record.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Postal addresses never show their sector.
            Address::Postal {
                street,
                postal_code,
                city,
                ..
            } => write!(f, "adress: {}, {}, {}", street, postal_code, city),
            Address::Email { address, sector } => write!(f, "epost {}: {}", sector.label(), address),
            Address::Phone { number, sector } => write!(f, "telefon {}: {}", sector.label(), number),
        }
    }
}
