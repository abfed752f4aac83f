use crate::directory::Directory;
use crate::model::Person;

/// Every person with their 0-based index, in directory order.
pub fn indexed_people(directory: &Directory) -> impl Iterator<Item = (usize, &Person)> {
    directory.people().iter().enumerate()
}

/// People whose display name contains `query`, case-sensitively.
pub fn find_by_display_name<'a>(directory: &'a Directory, query: &str) -> Vec<(usize, &'a Person)> {
    indexed_people(directory)
        .filter(|(_, p)| p.display_name().contains(query))
        .collect()
}
