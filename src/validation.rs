use crate::error::{PhonelistError, PhonelistResult};

/// Trimmed `value`, or `BlankField` naming `field` when nothing is left.
pub fn non_blank(value: &str, field: &str) -> PhonelistResult<String> {
    match value.trim() {
        "" => Err(PhonelistError::BlankField {
            field: field.to_string(),
        }),
        trimmed => Ok(trimmed.to_string()),
    }
}

/// Splits `value` on `sep`, trimming every part, and requires exactly `N` parts.
/// On a count mismatch returns the number of parts actually found.
pub fn split_exact<const N: usize>(value: &str, sep: char) -> Result<[String; N], usize> {
    let parts: Vec<String> = value.split(sep).map(|p| p.trim().to_string()).collect();
    let found = parts.len();
    parts.try_into().map_err(|_| found)
}

/// Splits a `key:value` field once on the first colon.
/// Both halves are trimmed; a missing colon or blank value is malformed.
pub fn key_value(field: &str) -> PhonelistResult<(&str, &str)> {
    match field.split_once(':') {
        Some((key, value)) if !value.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(PhonelistError::MalformedField {
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_field_keeps_inner_spaces() {
        let field = "Anna Britta Svensson ; telefon privat: 1".split(';').next().unwrap();
        assert_eq!(non_blank(field, "name").unwrap(), "Anna Britta Svensson");
    }

    #[test]
    fn blank_name_field_names_the_field() {
        let field = " \t; epost privat: anna@home.se".split(';').next().unwrap();
        let err = non_blank(field, "name").unwrap_err();
        assert!(matches!(err, PhonelistError::BlankField { ref field } if field == "name"));
        assert_eq!(err.to_string(), "name cannot be blank");
    }

    #[test]
    fn split_exact_trims_parts() {
        let [a, b, c] = split_exact::<3>(" Storgatan 1 ,12345,  Stockholm", ',').unwrap();
        assert_eq!(a, "Storgatan 1");
        assert_eq!(b, "12345");
        assert_eq!(c, "Stockholm");
    }

    #[test]
    fn split_exact_reports_too_few() {
        assert_eq!(split_exact::<3>("Storgatan 1, 12345", ','), Err(2));
    }

    #[test]
    fn split_exact_reports_too_many() {
        assert_eq!(split_exact::<3>("a, b, c, d", ','), Err(4));
    }

    #[test]
    fn key_value_splits_on_first_colon() {
        assert_eq!(key_value("epost privat: a:b").unwrap(), ("epost privat", "a:b"));
    }

    #[test]
    fn key_value_rejects_missing_colon() {
        assert!(key_value("telefon privat 08-123").is_err());
    }

    #[test]
    fn key_value_rejects_blank_value() {
        assert!(key_value("telefon privat:   ").is_err());
    }
}
