//! Identifier generation for newly created records.

use std::collections::HashSet;

use chrono::Utc;

/// Derive a fresh identifier from the current wall-clock time.
///
/// Identifiers are millisecond timestamps rendered as decimal strings, the
/// scheme the stored data format has always used. A candidate already in
/// `taken` (rapid successive inserts inside one millisecond) is bumped until
/// free, keeping ids unique and roughly monotonic within a process.
pub(crate) fn time_derived_id<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = taken.into_iter().collect();
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}
