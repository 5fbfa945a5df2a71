// Storage module.
// Capability trait over a local vacancy store keyed by vacancy id.

pub mod json_file;

use crate::models::vacancy::Vacancy;

/// Trait that vacancy stores implement. Every operation is fail-soft: read
/// and write errors degrade to {empty list, no-op} plus a diagnostic.
pub trait VacancyStorage {
    /// Insert, or replace in place when a record with the same id exists.
    /// The replaced record keeps its position.
    fn add_or_update(&self, vacancy: &Vacancy);

    /// All stored records, optionally narrowed to those whose title or
    /// description contains the keyword (case-insensitive substring).
    fn list(&self, keyword: Option<&str>) -> Vec<Vacancy>;

    /// Drop the record with the given id, if present.
    fn remove(&self, id: &str);

    /// Drop everything.
    fn clear(&self);
}
