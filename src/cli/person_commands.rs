use crate::directory::Directory;
use crate::error::{PhonelistError, PhonelistResult};
use crate::queries::person_queries;

pub const SHOW_USAGE: &str = "show /name/";

/// `  {index}: {first last}` for every person.
pub fn list(directory: &Directory) -> String {
    person_queries::indexed_people(directory)
        .map(|(i, person)| format!("  {}: {}\n", i, person))
        .collect()
}

/// Full records of everyone whose display name contains `query`.
/// No match renders as an empty string.
pub fn show(directory: &Directory, query: Option<&str>) -> PhonelistResult<String> {
    let query = query.ok_or_else(|| PhonelistError::MissingArgument {
        command: "show".into(),
        usage: SHOW_USAGE.into(),
    })?;

    let mut out = String::new();
    for (i, person) in person_queries::find_by_display_name(directory, query) {
        out.push_str(&format!("---- {} ----\n", i));
        out.push_str(&person.full_record());
        out.push('\n');
    }
    Ok(out)
}
