//! Turns one line of the phone list into a [`Person`].
//!
//! A line looks like
//! `Firstname [Middle...] Lastname; key1:value1; key2:value2`.
//! Problems with single fields never reject the whole line; they come back as
//! [`FieldWarning`]s next to the parsed person.

use std::fmt;

use tracing::debug;

use crate::error::{PhonelistError, PhonelistResult};
use crate::model::{Person, Sector};
use crate::validation;

/// A field that was dropped while parsing a record.
#[derive(Debug)]
pub enum FieldWarning {
    /// The key is not one we know. Only the value is reported.
    Unrecognized { key: String, value: String },
    /// The field could not be turned into an address.
    Malformed { field: String, error: PhonelistError },
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldWarning::Unrecognized { value, .. } => write!(f, "ignorerar skräp {}", value),
            FieldWarning::Malformed { field, error } => {
                write!(f, "ignorerar felaktigt fält '{}': {}", field, error)
            }
        }
    }
}

#[derive(Debug)]
pub struct ParsedRecord {
    pub person: Person,
    pub warnings: Vec<FieldWarning>,
}

/// Parses one record. Fails only when the line has no name.
pub fn parse_record(line: &str) -> PhonelistResult<ParsedRecord> {
    let mut fields = line.split(';').map(str::trim);
    let name = validation::non_blank(fields.next().unwrap_or_default(), "name")?;

    let mut person = parse_name(&name);
    let mut warnings = Vec::new();

    for field in fields {
        if field.is_empty() {
            continue;
        }
        if let Err(warning) = apply_field(&mut person, field) {
            warnings.push(warning);
        }
    }

    debug!(
        person = %person,
        addresses = person.addresses().len(),
        warnings = warnings.len(),
        "parsed record"
    );
    Ok(ParsedRecord { person, warnings })
}

/// First token is the first name, last token the surname, anything in between
/// is a middle name. A single token serves as both.
fn parse_name(name: &str) -> Person {
    // Any run of spaces or tabs separates tokens, so doubled spaces never
    // produce empty middle names.
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let first = tokens.first().copied().unwrap_or_default();
    let last = tokens.last().copied().unwrap_or_default();

    let mut person = Person::new(first, last);
    if tokens.len() >= 3 {
        for middle in &tokens[1..tokens.len() - 1] {
            person.add_middle_name(*middle);
        }
    }
    person
}

fn apply_field(person: &mut Person, field: &str) -> Result<(), FieldWarning> {
    let malformed = |error: PhonelistError| FieldWarning::Malformed {
        field: field.to_string(),
        error,
    };

    let (key, value) = validation::key_value(field).map_err(malformed)?;
    match key {
        "adress" => person.add_street(value, Sector::Private).map_err(malformed)?,
        "telefon privat" => person.add_phone(value, Sector::Private),
        "telefon arbete" => person.add_phone(value, Sector::Work),
        "epost privat" => person.add_email(value, Sector::Private),
        "epost arbete" => person.add_email(value, Sector::Work),
        _ => {
            return Err(FieldWarning::Unrecognized {
                key: key.to_string(),
                value: value.to_string(),
            })
        }
    }
    Ok(())
}
