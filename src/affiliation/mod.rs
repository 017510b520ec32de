//! Affiliation resolution: map an author e-mail to an organization name.
//!
//! The affiliation is the first domain component after the last `@`,
//! optionally remapped through an ordered aggregation table (so that
//! `nokia.com`, `nokia.fi` and `noklab.example` can all consolidate to
//! one name). Filtered addresses resolve to a fixed sentinel that
//! downstream graph filtering recognizes.

use std::collections::HashSet;

/// Returned when no domain can be extracted from the address.
pub const UNKNOWN: &str = "unknown";

/// Returned for addresses present in the email filter set. The exact
/// wording is part of the output contract; consumers match on it.
pub const FILTERED: &str = "filtered - included in file passed with -f argument";

/// Resolve `email` to an affiliation string. Pure: same inputs, same
/// output. Never returns an empty string.
pub fn resolve(
    email: &str,
    table: &[(String, String)],
    filter: Option<&HashSet<String>>,
) -> String {
    if let Some(filter) = filter
        && filter.contains(email)
    {
        return FILTERED.to_string();
    }

    // Fixups in fixed order: strip trailing '?', then split on '@'.
    let email = email.strip_suffix('?').unwrap_or(email);
    let Some(at) = email.rfind('@') else {
        return UNKNOWN.to_string();
    };
    let domain_part = &email[at + 1..];
    let domain_component = domain_part.split('.').next().unwrap_or("");
    if domain_component.is_empty() {
        return UNKNOWN.to_string();
    }

    let mut affiliation = domain_component.to_string();
    // The table is walked in full: a later entry can overwrite an earlier
    // match (legacy last-match-wins, kept deliberately).
    for (prefix, consolidated) in table {
        if domain_component.starts_with(prefix.as_str())
            || domain_component.contains(prefix.as_str())
        {
            affiliation = consolidated.clone();
        }
    }
    affiliation
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
