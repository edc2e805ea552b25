//! Nation id handling: turning display names into the lower_snake form the
//! vote API uses, and picking which id to query for a roster entry.

use crate::models::{DelegateEntry, IdentifierSource};

const SEPARATOR: char = '_';

/// Lower-cases `display_name`, collapses every run of characters outside
/// `[a-z0-9]` into a single `_` and trims separators from both ends.
///
/// `normalize("")` is `""`, as is any name with no ASCII letters or digits.
pub fn normalize(display_name: &str) -> String {
    let mut id = String::with_capacity(display_name.len());
    let mut pending_separator = false;

    for c in display_name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !id.is_empty() {
                id.push(SEPARATOR);
            }
            pending_separator = false;
            id.push(c);
        } else {
            pending_separator = true;
        }
    }

    id
}

/// The id to send to the vote API for this entry. Empty when a derived id
/// has nothing left after normalization.
pub fn resolve_identifier(entry: &DelegateEntry) -> String {
    match &entry.identifier {
        IdentifierSource::Explicit(id) => id.clone(),
        IdentifierSource::Derive => normalize(&entry.display_name),
    }
}
