use std::fmt;

use super::address::{Address, Sector};
use crate::error::PhonelistResult;

/// A person in the directory together with every way to reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    surname: String,
    middle_names: Vec<String>,
    addresses: Vec<Address>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            middle_names: Vec::new(),
            addresses: Vec::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn middle_names(&self) -> &[String] {
        &self.middle_names
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn add_middle_name(&mut self, name: impl Into<String>) {
        self.middle_names.push(name.into());
    }

    pub fn add_address(&mut self, address: Address) {
        self.addresses.push(address);
    }

    pub fn add_phone(&mut self, number: &str, sector: Sector) {
        self.add_address(Address::phone(number, sector));
    }

    pub fn add_email(&mut self, address: &str, sector: Sector) {
        self.add_address(Address::email(address, sector));
    }

    /// Adds a postal address given as `"street, postal code, city"`.
    pub fn add_street(&mut self, raw: &str, sector: Sector) -> PhonelistResult<()> {
        let address = Address::postal(raw, sector)?;
        self.add_address(address);
        Ok(())
    }

    /// `"first last"`, used for listing and searching.
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// Multi-line rendering with the full name and one indented line per address.
    pub fn full_record(&self) -> String {
        let middle: String = self
            .middle_names
            .iter()
            .map(|m| format!("{} ", m))
            .collect();

        let mut out = format!("NAMN: {} {}{}\n", self.first_name, middle, self.surname);
        out.push_str("  ADRESSER:\n");
        if self.addresses.is_empty() {
            out.push_str("--\n");
        } else {
            for address in &self.addresses {
                out.push_str(&format!("    {}\n", address));
            }
        }
        out
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.surname)
    }
}
