//! Common assertion helpers for output validation
//!
//! Provides predicates for validating the rendered status table and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Header line of the status table
pub fn has_table_header() -> impl Predicate<str> {
    predicates::str::contains("Repository")
        .and(predicates::str::contains("Branch"))
        .and(predicates::str::contains("Last Commit"))
}

/// A row for the given display name
pub fn has_row_for(name: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!("(?m)^{}\\s", regex_escape(name))).unwrap()
}

/// Error output for configuration problems
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}

fn regex_escape(value: &str) -> String {
    value
        .chars()
        .flat_map(|c| {
            if "\\.+*?()|[]{}^$".contains(c) {
                vec!['\\', c]
            } else {
                vec![c]
            }
        })
        .collect()
}
