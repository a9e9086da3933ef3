//! Query parameter assembly helpers.
//!
//! The list endpoints take optional filters that are passed through to the
//! API verbatim. This module collects present values into URL query pairs so
//! the client code stays free of `if let Some` boilerplate.

use std::fmt::Display;

/// Accumulator for URL query pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    /// Create a new, empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append the comma-joined form of a list when it is present and non-empty.
    ///
    /// Several endpoints take repeated values as a single comma-separated
    /// parameter (e.g. `statuses=ACTIVE,EXPIRED`).
    pub fn push_joined<T>(&mut self, key: &'static str, values: Option<&[T]>)
    where
        T: Display,
    {
        if let Some(values) = values {
            if !values.is_empty() {
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                self.pairs.push((key, joined));
            }
        }
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
